/// Side length of the standard board.
pub const BOARD_SIZE: usize = 6;

/// Vessel lengths of the standard fleet, in placement order.
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];
pub const FLEET_SIZE: usize = 7;

/// Total number of vessel segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed across the whole fleet before a board is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Whole-board regenerations tried before giving up on a board size.
pub const MAX_GENERATION_ROUNDS: usize = 1000;

/// Runtime settings for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub size: usize,
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            seed: None,
        }
    }
}
