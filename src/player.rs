use std::io;

use rand::rngs::SmallRng;

use crate::{
    board::Grid,
    common::{BoardError, ShotResult},
    coordinate::Coordinate,
};

/// Interface implemented by different player types.
///
/// A player only chooses where to shoot. The match fires the shot at the
/// opponent's grid and reports back.
pub trait Player {
    /// Name shown in match messages.
    fn name(&self) -> &str;

    /// Choose the next target on the opponent's board.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Grid) -> io::Result<Coordinate>;

    /// Inform the player that the grid refused its target.
    fn handle_rejected(&mut self, _target: Coordinate, _error: BoardError) -> io::Result<()> {
        Ok(())
    }

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: ShotResult) -> io::Result<()> {
        Ok(())
    }
}
