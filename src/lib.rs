mod board;
mod common;
mod config;
mod coordinate;
mod fleet;
mod game;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use fleet::FleetGenerator;
pub use game::*;
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use player::Player;
pub use player_ai::AiPlayer;
pub use player_cli::{parse_coord, CliPlayer, InputError};
pub use ship::{Orientation, Vessel};
