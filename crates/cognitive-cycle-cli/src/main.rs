//! Cognitive Cycle CLI
//!
//! Drives the tic-tac-toe agent from the command line.
//!
//! # Commands
//!
//! - `run`: Play one episode, optionally rendering the board each cycle
//! - `experiment`: Repeat seeded episodes and report the mean terminal reward
//!
//! Configuration is layered (`config/default.toml`, `COGNITIVE_CYCLE_ENV`
//! overlay, `COGNITIVE_CYCLE__`-prefixed environment variables) unless a
//! single file is pinned with `--config`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use cognitive_cycle_core::Config;

mod commands;

/// Cognitive Cycle CLI - run and evaluate the tic-tac-toe agent
#[derive(Parser)]
#[command(name = "cognitive-cycle-cli")]
#[command(version = "0.1.0")]
#[command(about = "Run and evaluate the cognitive cycle tic-tac-toe agent")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load exactly this TOML file instead of the layered configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one episode
    ///
    /// Runs the agent against a fresh environment until the configured
    /// cycle bound. Without a bound the loop runs until interrupted.
    Run(commands::run::RunArgs),
    /// Repeat seeded episodes and report the mean terminal reward
    ///
    /// Each episode gets a fresh agent and environment seeded with
    /// `base seed + episode index`, so an experiment is reproducible
    /// end to end.
    Experiment(commands::experiment::ExperimentArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.logging.level))
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    // Dispatch to command handlers
    let exit_code = match cli.command {
        Commands::Run(args) => commands::run::handle_run(args, config),
        Commands::Experiment(args) => commands::experiment::handle_experiment(args, config),
    };

    std::process::exit(exit_code);
}

fn load_config(path: Option<&std::path::Path>) -> cognitive_cycle_core::CoreResult<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}
