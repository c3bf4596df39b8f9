use std::io;

use seabattle::{AiPlayer, Match, MatchConfig, Side, BOARD_SIZE};
use serde::Serialize;

#[derive(Serialize)]
struct Summary {
    seed: u64,
    winner: Side,
    user_shots: usize,
    computer_shots: usize,
    user_sunk: usize,
    computer_sunk: usize,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let config = MatchConfig {
        size: BOARD_SIZE,
        seed: Some(seed),
    };
    let mut game = Match::new(
        config,
        Box::new(AiPlayer::named("Player")),
        Box::new(AiPlayer::new()),
        io::sink(),
    )?;
    let winner = game.run()?;

    let summary = Summary {
        seed,
        winner,
        user_shots: game.shots_fired(Side::User),
        computer_shots: game.shots_fired(Side::Computer),
        user_sunk: game.computer_board().destroyed_count(),
        computer_sunk: game.user_board().destroyed_count(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
