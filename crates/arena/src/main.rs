//! Arena CLI
//!
//! Ask a player for a single move, or run a match between two players.

use std::path::PathBuf;

use anyhow::{Context, Result};
use arena::{
    choose_move, create_player, ArenaConfig, MatchConfig, MatchRunner, PlayerConfig,
};
use chess_core::Position;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a move for the side to move in a FEN position
    Choose {
        #[arg(long)]
        fen: String,

        /// Player: random, search, search:<depth> or search:<depth>:<eval>
        #[arg(long, default_value = "search:4")]
        player: PlayerConfig,
    },
    /// Play a match between two players
    Play {
        /// TOML match configuration
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        white: Option<PlayerConfig>,

        #[arg(long)]
        black: Option<PlayerConfig>,

        #[arg(long, short)]
        games: Option<u32>,

        #[arg(long)]
        max_plies: Option<u32>,

        #[arg(long)]
        seed: Option<u64>,

        /// Write the match summary here as JSON
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Choose { fen, player } => run_choose(&fen, &player),
        Command::Play {
            config,
            white,
            black,
            games,
            max_plies,
            seed,
            output,
        } => {
            let mut arena = match config {
                Some(path) => ArenaConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => ArenaConfig::default(),
            };
            if let Some(white) = white {
                arena.white = white;
            }
            if let Some(black) = black {
                arena.black = black;
            }
            if let Some(games) = games {
                arena.games = games;
            }
            if let Some(max_plies) = max_plies {
                arena.max_plies = max_plies;
            }
            if seed.is_some() {
                arena.seed = seed;
            }
            run_play(&arena, output)
        }
    }
}

fn run_choose(fen: &str, player: &PlayerConfig) -> Result<()> {
    let pos = Position::from_fen(fen)?;
    let decision = choose_move(&pos, player).with_context(|| format!("{player} on {fen}"))?;

    println!("bestmove {}", decision.mv);
    println!("score {}", decision.score);
    println!("evaluations {}", decision.stats.evaluations);
    println!("fen {}", pos.apply(&decision.mv).to_fen());
    Ok(())
}

fn run_play(arena: &ArenaConfig, output: Option<PathBuf>) -> Result<()> {
    let mut white = create_player(&arena.white, arena.seed);
    let mut black = create_player(&arena.black, arena.seed.map(|s| s.wrapping_add(1)));

    tracing::info!(
        white = %arena.white,
        black = %arena.black,
        games = arena.games,
        max_plies = arena.max_plies,
        "starting match"
    );

    let runner = MatchRunner::new(MatchConfig::from(arena));
    let summary = runner.run_match(&mut white, &mut black)?;
    summary.print_report();

    if let Some(path) = output {
        summary
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        tracing::info!(path = %path.display(), "results saved");
    }
    Ok(())
}
