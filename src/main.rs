use std::io;

use clap::{Parser, Subcommand};
use seabattle::{init_logging, AiPlayer, CliPlayer, Match, MatchConfig, BOARD_SIZE};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on the local machine.
    Play {
        #[arg(long, default_value_t = BOARD_SIZE as u16, value_parser = clap::value_parser!(u16).range(1..=26))]
        size: u16,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, default_value_t = BOARD_SIZE as u16, value_parser = clap::value_parser!(u16).range(1..=26))]
        size: u16,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (config, human) = match cli.command {
        None => (MatchConfig::default(), true),
        Some(Commands::Play { size, seed }) => (MatchConfig { size: usize::from(size), seed }, true),
        Some(Commands::Auto { size, seed }) => (MatchConfig { size: usize::from(size), seed }, false),
    };
    if let Some(s) = config.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let user: Box<dyn seabattle::Player> = if human {
        Box::new(CliPlayer::stdio())
    } else {
        Box::new(AiPlayer::named("Player"))
    };
    let mut game = Match::new(config, user, Box::new(AiPlayer::new()), io::stdout())?;
    game.run()?;
    Ok(())
}
