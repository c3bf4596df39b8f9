use std::io;

use log::debug;
use rand::{rngs::SmallRng, seq::IndexedRandom};

use crate::{board::Grid, coordinate::Coordinate, player::Player};

/// Opponent that fires at a uniformly random cell it has not tried yet.
pub struct AiPlayer {
    name: String,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::named("Computer")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Grid) -> io::Result<Coordinate> {
        let open: Vec<Coordinate> = enemy.targets().collect();
        let target = open
            .choose(rng)
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no cells left to target"))?;
        debug!("{} picked {} of {} open cells", self.name, target, open.len());
        Ok(target)
    }
}
