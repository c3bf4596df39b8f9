//! Match controller: two boards, two players, alternating turns.

use std::io::{self, Write};

use log::info;
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    board::Grid,
    common::{GenerationFailure, ShotResult},
    config::{MatchConfig, FLEET_SIZE},
    coordinate::Coordinate,
    fleet::FleetGenerator,
    player::Player,
    ui,
};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    User,
    Computer,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::User => Side::Computer,
            Side::Computer => Side::User,
        }
    }
}

/// Current status of a match from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A shot the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coordinate,
    pub result: ShotResult,
}

/// RNG from a fixed seed, or from the thread RNG when none is given.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

pub struct Match<W: Write> {
    user: Box<dyn Player>,
    computer: Box<dyn Player>,
    user_board: Grid,
    computer_board: Grid,
    fleet_size: usize,
    turn: Side,
    shots: [usize; 2],
    rng: SmallRng,
    out: W,
}

impl<W: Write> Match<W> {
    /// Generate both boards for `config` and seat the players. The user's
    /// board is generated first, so a fixed seed fixes both layouts.
    pub fn new(
        config: MatchConfig,
        user: Box<dyn Player>,
        computer: Box<dyn Player>,
        out: W,
    ) -> Result<Self, GenerationFailure> {
        let mut rng = seeded_rng(config.seed);
        let generator = FleetGenerator::new(config.size);
        let user_board = generator.generate_board(&mut rng)?;
        let computer_board = generator.generate_board(&mut rng)?;
        Ok(Self::with_boards(user_board, computer_board, user, computer, rng, out))
    }

    /// Seat the players at prepared boards. The computer's board is hidden.
    pub fn with_boards(
        user_board: Grid,
        mut computer_board: Grid,
        user: Box<dyn Player>,
        computer: Box<dyn Player>,
        rng: SmallRng,
        out: W,
    ) -> Self {
        computer_board.set_hidden(true);
        Self {
            user,
            computer,
            user_board,
            computer_board,
            fleet_size: FLEET_SIZE,
            turn: Side::User,
            shots: [0; 2],
            rng,
            out,
        }
    }

    /// Number of sunk vessels that ends the match. Defaults to the standard fleet.
    pub fn with_fleet_size(mut self, fleet_size: usize) -> Self {
        self.fleet_size = fleet_size;
        self
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn user_board(&self) -> &Grid {
        &self.user_board
    }

    pub fn computer_board(&self) -> &Grid {
        &self.computer_board
    }

    /// Accepted shots fired by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side as usize]
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// The side whose opponent has lost its whole fleet, if any.
    pub fn winner(&self) -> Option<Side> {
        if self.computer_board.destroyed_count() >= self.fleet_size {
            Some(Side::User)
        } else if self.user_board.destroyed_count() >= self.fleet_size {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            None => GameStatus::InProgress,
            Some(Side::User) => GameStatus::Won,
            Some(Side::Computer) => GameStatus::Lost,
        }
    }

    /// Let the side to move fire until the grid accepts a shot. A miss hands
    /// the turn to the other side.
    pub fn play_turn(&mut self) -> io::Result<TurnReport> {
        let side = self.turn;
        let (shooter, board) = match side {
            Side::User => (&mut self.user, &mut self.computer_board),
            Side::Computer => (&mut self.computer, &mut self.user_board),
        };
        loop {
            let target = shooter.select_target(&mut self.rng, board)?;
            let result = match board.shoot(target) {
                Ok(result) => result,
                Err(e) => {
                    shooter.handle_rejected(target, e)?;
                    continue;
                }
            };
            if side == Side::Computer {
                writeln!(
                    self.out,
                    "{} move: {} -> {}",
                    shooter.name(),
                    target,
                    result.message()
                )?;
            }
            shooter.handle_shot_result(target, result)?;
            self.shots[side as usize] += 1;
            if !result.fire_again() {
                self.turn = side.other();
            }
            return Ok(TurnReport {
                side,
                target,
                result,
            });
        }
    }

    /// Play until one fleet is destroyed and return the winner.
    pub fn run(&mut self) -> io::Result<Side> {
        info!(
            "match started on a {0}x{0} board",
            self.user_board.size()
        );
        ui::print_greeting(&mut self.out)?;
        loop {
            match self.turn {
                Side::User => ui::print_boards(&mut self.out, &self.user_board, &self.computer_board)?,
                Side::Computer => {
                    writeln!(self.out, "{}", "-".repeat(20))?;
                    writeln!(self.out, "{} moves!", self.computer.name())?;
                }
            }
            self.play_turn()?;
            if let Some(winner) = self.winner() {
                ui::print_boards(&mut self.out, &self.user_board, &self.computer_board)?;
                writeln!(self.out, "{}", "-".repeat(20))?;
                let name = match winner {
                    Side::User => self.user.name(),
                    Side::Computer => self.computer.name(),
                };
                writeln!(self.out, "{} won!", name)?;
                info!(
                    "match over: {:?} won after {} user and {} computer shots",
                    winner, self.shots[0], self.shots[1]
                );
                return Ok(winner);
            }
        }
    }
}
