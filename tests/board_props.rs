use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use seabattle::{
    BoardError, Coordinate, FleetGenerator, Grid, ShotResult, BOARD_SIZE, FLEET_SIZE,
};

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    FleetGenerator::new(BOARD_SIZE).generate_board(&mut rng).unwrap()
}

fn all_cells(size: usize) -> Vec<Coordinate> {
    let size = size as i32;
    (0..size)
        .flat_map(|r| (0..size).map(move |c| Coordinate::new(r, c)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn off_board_shots_rejected(size in 1usize..12, row in -20i32..20, col in -20i32..20) {
        let s = size as i32;
        prop_assume!(row < 0 || row >= s || col < 0 || col >= s);
        let mut grid = Grid::new(size);
        prop_assert_eq!(grid.shoot(Coordinate::new(row, col)), Err(BoardError::OutOfBounds));
    }

    #[test]
    fn repeat_shot_rejected(seed in any::<u64>(), row in 0..BOARD_SIZE as i32, col in 0..BOARD_SIZE as i32) {
        let mut grid = random_grid(seed);
        let target = Coordinate::new(row, col);
        prop_assert!(grid.shoot(target).is_ok());
        let destroyed = grid.destroyed_count();
        prop_assert_eq!(grid.shoot(target), Err(BoardError::AlreadyTargeted));
        prop_assert_eq!(grid.destroyed_count(), destroyed);
    }

    #[test]
    fn destroyed_count_tracks_sunk_results(seed in any::<u64>()) {
        let mut grid = random_grid(seed);
        let mut order = all_cells(BOARD_SIZE);
        order.shuffle(&mut SmallRng::seed_from_u64(seed ^ 0x5eed));

        let mut sunk = 0;
        for target in order {
            let before = grid.destroyed_count();
            let res = grid.shoot(target);
            let after = grid.destroyed_count();
            match res {
                Ok(ShotResult::Sunk) => {
                    sunk += 1;
                    prop_assert_eq!(after, before + 1);
                }
                _ => prop_assert_eq!(after, before),
            }
        }
        prop_assert_eq!(sunk, FLEET_SIZE);
        prop_assert_eq!(grid.destroyed_count(), FLEET_SIZE);
        prop_assert!(grid.all_sunk());
        prop_assert_eq!(grid.targets().count(), 0);
    }

    #[test]
    fn vessel_sinks_on_its_last_segment(seed in any::<u64>()) {
        let mut grid = random_grid(seed);
        let vessels = grid.vessels().to_vec();
        for (i, vessel) in vessels.iter().enumerate() {
            let cells: Vec<_> = vessel.cells().collect();
            for (n, cell) in cells.iter().enumerate() {
                prop_assert!(!grid.vessels()[i].is_destroyed());
                let expected = if n + 1 == cells.len() { ShotResult::Sunk } else { ShotResult::Hit };
                prop_assert_eq!(grid.shoot(*cell), Ok(expected));
            }
            prop_assert!(grid.vessels()[i].is_destroyed());
            prop_assert_eq!(grid.destroyed_count(), i + 1);
        }
    }
}
