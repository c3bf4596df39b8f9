//! Random fleet placement.

use log::{debug, warn};
use rand::Rng;

use crate::board::Grid;
use crate::common::GenerationFailure;
use crate::config::{FLEET, MAX_GENERATION_ROUNDS, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Vessel};

/// Places a fixed fleet composition on an empty board at random.
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    size: usize,
    composition: Vec<usize>,
    attempt_budget: usize,
}

impl FleetGenerator {
    /// Generator for the standard fleet on a `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            composition: FLEET.to_vec(),
            attempt_budget: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Use a different list of vessel lengths, placed in the given order.
    pub fn with_composition(mut self, composition: &[usize]) -> Self {
        self.composition = composition.to_vec();
        self
    }

    /// Override the number of placement attempts shared by the whole fleet.
    pub fn with_attempt_budget(mut self, attempts: usize) -> Self {
        self.attempt_budget = attempts;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn composition(&self) -> &[usize] {
        &self.composition
    }

    /// Make one attempt at a fully populated board.
    ///
    /// Anchors are drawn from the whole board without regard to vessel length;
    /// placements that run off the edge or touch another vessel are rejected
    /// by the grid and redrawn. Once the shared attempt budget is spent the
    /// partial board is thrown away.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, GenerationFailure> {
        let mut grid = Grid::new(self.size);
        let mut attempts = 0;
        for &length in &self.composition {
            loop {
                attempts += 1;
                if attempts > self.attempt_budget || self.size == 0 {
                    warn!(
                        "fleet placement on a {0}x{0} board gave up after {1} attempts",
                        self.size, self.attempt_budget
                    );
                    return Err(GenerationFailure {
                        attempts: attempts - 1,
                    });
                }
                let vessel = random_vessel(rng, self.size, length);
                if grid.place_vessel(vessel).is_ok() {
                    break;
                }
            }
        }
        grid.clear_exclusions();
        debug!("fleet placed after {} attempts", attempts);
        Ok(grid)
    }

    /// Regenerate from scratch until a board comes out, trying at most
    /// `MAX_GENERATION_ROUNDS` times.
    pub fn generate_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, GenerationFailure> {
        let mut last = GenerationFailure { attempts: 0 };
        for _ in 0..MAX_GENERATION_ROUNDS {
            match self.generate(rng) {
                Ok(grid) => return Ok(grid),
                Err(e) => last = e,
            }
        }
        Err(last)
    }
}

fn random_vessel<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize) -> Vessel {
    let row = rng.random_range(0..size) as i32;
    let col = rng.random_range(0..size) as i32;
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Vessel::new(length, Coordinate::new(row, col), orientation)
}
