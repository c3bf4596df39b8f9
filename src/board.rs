//! Game board state: cell overlay, placed vessels and excluded cells.

use core::fmt;
use std::collections::{HashMap, HashSet};

use log::debug;

use crate::common::{BoardError, ShotResult};
use crate::coordinate::Coordinate;
use crate::ship::Vessel;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    ShipPresent,
    Miss,
    Hit,
    Destroyed,
}

impl CellState {
    /// Glyph drawn for this cell. Vessels are blanked when `hidden`.
    pub fn glyph(self, hidden: bool) -> char {
        match self {
            CellState::Empty => ' ',
            CellState::ShipPresent if hidden => ' ',
            CellState::ShipPresent => '■',
            CellState::Miss => '-',
            CellState::Hit => 'X',
            CellState::Destroyed => '#',
        }
    }
}

/// A square board holding one player's fleet.
#[derive(Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
    vessels: Vec<Vessel>,
    // cell -> index into `vessels`
    occupancy: HashMap<Coordinate, usize>,
    excluded: HashSet<Coordinate>,
    destroyed: usize,
    hidden: bool,
}

impl Grid {
    /// Create an empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Empty; size * size],
            vessels: Vec::new(),
            occupancy: HashMap::new(),
            excluded: HashSet::new(),
            destroyed: 0,
            hidden: false,
        }
    }

    /// Build a board from a list of vessels and clear the placement exclusions,
    /// leaving it ready to be fired upon.
    pub fn from_vessels<I>(size: usize, vessels: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Vessel>,
    {
        let mut grid = Self::new(size);
        for vessel in vessels {
            grid.place_vessel(vessel)?;
        }
        grid.clear_exclusions();
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Placed vessels, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels sunk so far. Never decreases.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Returns `true` when at least one vessel is placed and all are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.vessels.is_empty() && self.destroyed == self.vessels.len()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hide vessel markers when rendering.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn in_range(&self, c: Coordinate) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(c.row as i64)) && (0..size).contains(&(c.col as i64))
    }

    /// Returns `true` if `c` is blocked for placement or targeting.
    pub fn is_excluded(&self, c: Coordinate) -> bool {
        self.excluded.contains(&c)
    }

    /// Returns `true` if a shot at `c` would be accepted.
    pub fn targetable(&self, c: Coordinate) -> bool {
        self.in_range(c) && !self.is_excluded(c)
    }

    /// All cells that can still be fired upon, row by row.
    pub fn targets(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let size = self.size as i32;
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
            .filter(move |&c| !self.is_excluded(c))
    }

    /// State of the cell at `c`, or `None` if off the board.
    pub fn cell(&self, c: Coordinate) -> Option<CellState> {
        if self.in_range(c) {
            Some(self.cells[self.index(c)])
        } else {
            None
        }
    }

    /// Drop every exclusion. Called once after fleet placement so that
    /// targeting starts from a clean slate.
    pub fn clear_exclusions(&mut self) {
        self.excluded.clear();
    }

    /// Place a vessel. Either every cell is free and in range and the vessel is
    /// added together with its surrounding ring, or nothing changes.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if vessel.length() == 0 || vessel.length() > self.size {
            return Err(BoardError::NoFreeSpace);
        }
        if vessel
            .cells()
            .any(|c| !self.in_range(c) || self.is_excluded(c))
        {
            return Err(BoardError::NoFreeSpace);
        }

        let index = self.vessels.len();
        for c in vessel.cells() {
            self.set(c, CellState::ShipPresent);
            self.excluded.insert(c);
            self.occupancy.insert(c, index);
        }
        self.vessels.push(vessel);
        self.contour(index, false);
        debug!("placed {:?}", vessel);
        Ok(())
    }

    /// Fire at `c` and report what was struck.
    pub fn shoot(&mut self, c: Coordinate) -> Result<ShotResult, BoardError> {
        if !self.in_range(c) {
            return Err(BoardError::OutOfBounds);
        }
        if !self.excluded.insert(c) {
            return Err(BoardError::AlreadyTargeted);
        }

        let Some(index) = self.occupancy.get(&c).copied() else {
            self.set(c, CellState::Miss);
            debug!("shot at ({}, {}) missed", c.row, c.col);
            return Ok(ShotResult::Miss);
        };

        self.set(c, CellState::Hit);
        let vessel = &mut self.vessels[index];
        vessel.register_hit()?;
        if !vessel.is_destroyed() {
            debug!("shot at ({}, {}) hit vessel {}", c.row, c.col, index);
            return Ok(ShotResult::Hit);
        }

        self.destroyed += 1;
        let cells: Vec<Coordinate> = self.vessels[index].cells().collect();
        for cell in cells {
            self.set(cell, CellState::Destroyed);
        }
        self.contour(index, true);
        debug!(
            "shot at ({}, {}) sank vessel {} ({} destroyed)",
            c.row, c.col, index, self.destroyed
        );
        Ok(ShotResult::Sunk)
    }

    /// Render the board as text: a header row of column numbers followed by one
    /// labelled row per board row.
    pub fn render(&self) -> String {
        self.to_string()
    }

    // Exclude the ring of cells around a vessel. With `reveal` the ring is
    // also drawn as misses.
    fn contour(&mut self, index: usize, reveal: bool) {
        let cells: Vec<Coordinate> = self.vessels[index].cells().collect();
        for cell in cells {
            for n in cell.neighbours() {
                if self.in_range(n) && self.excluded.insert(n) && reveal {
                    self.set(n, CellState::Miss);
                }
            }
        }
    }

    fn index(&self, c: Coordinate) -> usize {
        c.row as usize * self.size + c.col as usize
    }

    fn set(&mut self, c: Coordinate, state: CellState) {
        let i = self.index(c);
        self.cells[i] = state;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.max(1).to_string().len();
        let mut header = " ".repeat(width + 1);
        for col in 0..self.size {
            header.push_str(&format!("{:^3}", col + 1));
        }
        write!(f, "{}", header.trim_end())?;
        for row in 0..self.size {
            write!(f, "\n{:>width$} ", row + 1, width = width)?;
            for col in 0..self.size {
                let state = self.cells[row * self.size + col];
                write!(f, "[{}]", state.glyph(self.hidden))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  size: {},\n  destroyed: {},\n  hidden: {},\n  vessels: {:?}\n}}",
            self.size, self.destroyed, self.hidden, self.vessels
        )
    }
}
