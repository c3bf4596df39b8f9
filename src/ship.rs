//! Vessel definitions: a straight run of cells with hit-point tracking.

use core::fmt;

use crate::common::BoardError;
use crate::coordinate::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells extend downwards (increasing row).
    Vertical,
    /// Cells extend to the right (increasing column).
    Horizontal,
}

/// A vessel anchored at a cell, extending `length` cells along its orientation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    anchor: Coordinate,
    orientation: Orientation,
    health: usize,
}

impl Vessel {
    /// Create an undamaged vessel. No bounds are checked here.
    pub fn new(length: usize, anchor: Coordinate, orientation: Orientation) -> Self {
        Self {
            length,
            anchor,
            orientation,
            health: length,
        }
    }

    /// Vessel's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// First cell of the vessel.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Orientation of the vessel.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged segments left.
    pub fn remaining_health(&self) -> usize {
        self.health
    }

    /// The `length` cells covered by the vessel, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dr, dc) = match self.orientation {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
        };
        (0..self.length)
            .map_while(|i| i32::try_from(i).ok())
            .map(move |i| self.anchor.offset(dr * i, dc * i))
    }

    /// Returns `true` if the vessel covers `c`.
    pub fn contains(&self, c: Coordinate) -> bool {
        self.cells().any(|cell| cell == c)
    }

    /// Take one point of damage.
    pub fn register_hit(&mut self) -> Result<(), BoardError> {
        if self.health == 0 {
            return Err(BoardError::VesselDestroyed);
        }
        self.health -= 1;
        Ok(())
    }

    /// Check if every segment has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ length: {}, anchor: ({}, {}), orientation: {:?}, health: {} }}",
            self.length, self.anchor.row, self.anchor.col, self.orientation, self.health,
        )
    }
}
