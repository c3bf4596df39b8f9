use std::io::{self, Cursor};

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{BoardError, CliPlayer, Coordinate, Grid, Player, ShotResult};

fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_reprompts_until_valid() {
    let mut rng = SmallRng::seed_from_u64(1);
    let grid = Grid::new(6);
    let mut p = player("x y\n1\n\n2 3\n");
    let target = p.select_target(&mut rng, &grid).unwrap();
    assert_eq!(target, Coordinate::new(1, 2));

    let out = String::from_utf8(p.into_output()).unwrap();
    assert_eq!(out.matches("Your move: ").count(), 4);
    assert!(out.contains("Enter numbers!"));
    assert_eq!(out.matches("Enter 2 coordinates!").count(), 2);
}

#[test]
fn test_eof_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(1);
    let grid = Grid::new(6);
    let mut p = player("bad\n");
    let err = p.select_target(&mut rng, &grid).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn test_feedback_messages() {
    let mut p = player("");
    p.handle_rejected(Coordinate::new(6, 0), BoardError::OutOfBounds)
        .unwrap();
    p.handle_rejected(Coordinate::new(0, 0), BoardError::AlreadyTargeted)
        .unwrap();
    p.handle_shot_result(Coordinate::new(0, 0), ShotResult::Sunk)
        .unwrap();
    let out = String::from_utf8(p.into_output()).unwrap();
    assert!(out.contains("shot lands outside the board"));
    assert!(out.contains("that cell has already been targeted"));
    assert!(out.contains("1 1 -> Vessel destroyed!"));
}

#[test]
fn test_oversized_input_reaches_the_board() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut grid = Grid::new(6);
    let mut p = player("70000 1\n");
    let target = p.select_target(&mut rng, &grid).unwrap();
    assert_eq!(grid.shoot(target), Err(BoardError::OutOfBounds));
    let out = String::from_utf8(p.into_output()).unwrap();
    assert!(!out.contains("Enter numbers!"));
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_feedback_write_errors_are_returned() {
    let mut p = CliPlayer::new(Cursor::new(Vec::new()), BrokenPipe);
    let err = p
        .handle_shot_result(Coordinate::new(0, 0), ShotResult::Hit)
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert!(p
        .handle_rejected(Coordinate::new(9, 9), BoardError::OutOfBounds)
        .is_err());
}
