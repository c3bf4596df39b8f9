//! Common types for Sea Battle: shot results and board errors.

use thiserror::Error;

/// Outcome of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ShotResult {
    /// Shot landed on open water. The turn passes.
    Miss,
    /// Shot damaged a vessel that is still afloat.
    Hit,
    /// Shot destroyed the last undamaged segment of a vessel.
    Sunk,
}

impl ShotResult {
    /// `Hit` and `Sunk` let the shooter fire again.
    pub fn fire_again(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }

    /// Message announced after the shot.
    pub fn message(self) -> &'static str {
        match self {
            ShotResult::Miss => "Miss...",
            ShotResult::Hit => "Vessel hit!",
            ShotResult::Sunk => "Vessel destroyed!",
        }
    }
}

/// Errors returned by Grid and Vessel operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target coordinate lies outside the grid.
    #[error("shot lands outside the board")]
    OutOfBounds,
    /// Coordinate was already fired upon or lies in a revealed ring.
    #[error("that cell has already been targeted")]
    AlreadyTargeted,
    /// Vessel placement runs off the board, overlaps or touches another vessel.
    #[error("no free space for the vessel")]
    NoFreeSpace,
    /// A hit was registered on a vessel that is already destroyed.
    #[error("vessel is already destroyed")]
    VesselDestroyed,
}

/// The fleet could not be placed within the attempt budget.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unable to place the fleet after {attempts} attempts")]
pub struct GenerationFailure {
    pub attempts: usize,
}
