use seabattle::{BoardError, Coordinate, Orientation, Vessel};

#[test]
fn test_cells_follow_orientation() {
    let vertical = Vessel::new(3, Coordinate::new(1, 2), Orientation::Vertical);
    let cells: Vec<_> = vertical.cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(1, 2), Coordinate::new(2, 2), Coordinate::new(3, 2)]
    );

    let horizontal = Vessel::new(2, Coordinate::new(4, 0), Orientation::Horizontal);
    let cells: Vec<_> = horizontal.cells().collect();
    assert_eq!(cells, vec![Coordinate::new(4, 0), Coordinate::new(4, 1)]);
}

#[test]
fn test_cells_may_run_off_the_board() {
    // vessels carry no bounds of their own
    let v = Vessel::new(2, Coordinate::new(-1, 5), Orientation::Horizontal);
    assert!(v.contains(Coordinate::new(-1, 6)));
    assert!(!v.contains(Coordinate::new(0, 5)));
}

#[test]
fn test_register_hit_and_destroyed() -> Result<(), BoardError> {
    let mut v = Vessel::new(2, Coordinate::new(0, 0), Orientation::Vertical);
    assert_eq!(v.remaining_health(), 2);
    assert!(!v.is_destroyed());
    v.register_hit()?;
    assert!(!v.is_destroyed());
    v.register_hit()?;
    assert!(v.is_destroyed());
    assert_eq!(v.remaining_health(), 0);
    assert_eq!(v.register_hit(), Err(BoardError::VesselDestroyed));
    assert_eq!(v.remaining_health(), 0);
    Ok(())
}
