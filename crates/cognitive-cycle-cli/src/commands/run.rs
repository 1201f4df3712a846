//! Run command: play one episode.
//!
//! # Usage
//!
//! ```bash
//! # Nine cycles, board printed every cycle
//! cognitive-cycle-cli run -n 9 --render
//!
//! # Unbounded run with the configured seed
//! cognitive-cycle-cli run
//! ```

use clap::Args;
use tracing::{error, info};

use cognitive_cycle_core::{Config, RunOptions};
use cognitive_cycle_env::{build_agent, TicTacToeEnv};

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Cycles to execute (omit to run until interrupted)
    #[arg(short = 'n', long)]
    pub cycles: Option<u64>,

    /// Render the board every cycle
    #[arg(long)]
    pub render: bool,

    /// Override the configured RNG seed
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute the run command.
///
/// # Returns
///
/// Exit code:
/// - 0: Episode completed
/// - 1: Run loop failed
pub fn handle_run(args: RunArgs, mut config: Config) -> i32 {
    if args.cycles.is_some() {
        config.run.cycles = args.cycles;
    }
    if args.render {
        config.run.render = true;
    }
    if let Some(seed) = args.seed {
        config.run.seed = seed;
    }

    let options = RunOptions::from_config(&config);
    let mut agent = build_agent(&config);
    let mut env = TicTacToeEnv::new(config.run.seed);

    info!(seed = config.run.seed, cycles = ?config.run.cycles, "starting episode");
    match agent.run(&mut env, &options) {
        Ok(summary) => {
            let terminal = summary
                .terminal_reward
                .map_or_else(|| "none".to_string(), |reward| format!("{reward:.2}"));
            println!(
                "cycles: {}  terminal reward: {}  total reward: {:.2}",
                summary.cycles, terminal, summary.total_reward
            );
            0
        }
        Err(err) => {
            error!(error = %err, "episode failed");
            1
        }
    }
}
