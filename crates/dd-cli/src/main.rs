//! Text front end for Dice Duel: roll a d6 against the computer, keep
//! a history of finished games.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use dd_core::{DieRoller, GameSettings};

#[derive(Parser)]
#[command(
    name = "duel",
    about = "Dice Duel — roll a die against the computer",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Result log to read and append to (default: results.json next to the executable)
    #[arg(long, global = true)]
    results_file: Option<PathBuf>,

    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Skip the pause between rounds
    #[arg(long, global = true)]
    no_pause: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game, prompting for anything not given
    Play {
        /// Player name
        #[arg(short, long)]
        name: Option<String>,

        /// Game level: 1 (5 rounds), 2 (8 rounds) or 3 (10 rounds)
        #[arg(short, long)]
        level: Option<String>,
    },

    /// Show the results of previous games
    Results,
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    install_interrupt_handler();

    let mut settings = GameSettings::default();
    if let Some(path) = cli.results_file {
        settings = settings.with_results_file(path);
    }
    if cli.no_pause {
        settings = settings.with_round_pause(Duration::ZERO);
    }

    debug!(
        results_file = %settings.results_file().display(),
        pause = ?settings.round_pause(),
        seed = ?cli.seed,
        "settings ready"
    );

    let mut dice = match cli.seed {
        Some(seed) => DieRoller::seeded(seed),
        None => DieRoller::from_os(),
    };

    let result = match cli.command {
        None => commands::menu::run(&settings, &mut dice),
        Some(Commands::Play { name, level }) => {
            commands::play::run(&settings, &mut dice, name.as_deref(), level.as_deref())
        }
        Some(Commands::Results) => commands::results::run(&settings),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
/// Ctrl-C ends the process before any session reaches `finish`, so an
/// interrupted game is never recorded.
fn install_interrupt_handler() {
    if let Err(e) = ctrlc::set_handler(|| {
        println!("\nGame interrupted.");
        process::exit(130);
    }) {
        warn!(error = %e, "could not install Ctrl-C handler");
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
