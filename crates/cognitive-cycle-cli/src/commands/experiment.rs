//! Experiment command: repeated seeded episodes.
//!
//! Every episode gets a fresh agent and a fresh environment, both seeded
//! with `base seed + episode index`, so the whole experiment replays from
//! a single number.
//!
//! # Usage
//!
//! ```bash
//! # Thirty episodes of a thousand cycles each
//! cognitive-cycle-cli experiment
//!
//! # Machine-readable summary
//! cognitive-cycle-cli experiment --episodes 5 --cycles 200 --json
//! ```

use clap::Args;
use serde::Serialize;
use tracing::{error, info};

use cognitive_cycle_core::{Config, CoreResult, RunOptions};
use cognitive_cycle_env::{build_agent, TicTacToeEnv};

/// Arguments for the experiment command.
#[derive(Args, Debug)]
pub struct ExperimentArgs {
    /// Number of episodes
    #[arg(short, long, default_value_t = 30)]
    pub episodes: u64,

    /// Cycles per episode
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub cycles: u64,

    /// Override the configured base seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Aggregate over all episodes of one experiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentSummary {
    pub episodes: u64,
    pub cycles_per_episode: u64,
    pub base_seed: u64,
    /// Terminal reward per episode; `None` when the bound ran out first.
    pub terminal_rewards: Vec<Option<f32>>,
    /// Mean terminal reward over the episodes that reached a terminal state.
    pub mean_terminal_reward: f32,
}

fn run_experiment(args: &ExperimentArgs, config: &Config) -> CoreResult<ExperimentSummary> {
    let base_seed = args.seed.unwrap_or(config.run.seed);
    let options = RunOptions {
        cycles: Some(args.cycles),
        render: false,
    };

    let mut terminal_rewards = Vec::with_capacity(args.episodes as usize);
    for episode in 0..args.episodes {
        let seed = base_seed + episode;
        let mut episode_config = config.clone();
        episode_config.run.seed = seed;

        let mut agent = build_agent(&episode_config);
        let mut env = TicTacToeEnv::new(seed);
        let summary = agent.run(&mut env, &options)?;

        info!(
            episode,
            seed,
            cycles = summary.cycles,
            terminal_reward = ?summary.terminal_reward,
            "episode finished"
        );
        terminal_rewards.push(summary.terminal_reward);
    }

    let finished: Vec<f32> = terminal_rewards.iter().flatten().copied().collect();
    let mean_terminal_reward = if finished.is_empty() {
        0.0
    } else {
        finished.iter().sum::<f32>() / finished.len() as f32
    };

    Ok(ExperimentSummary {
        episodes: args.episodes,
        cycles_per_episode: args.cycles,
        base_seed,
        terminal_rewards,
        mean_terminal_reward,
    })
}

/// Execute the experiment command.
///
/// # Returns
///
/// Exit code:
/// - 0: All episodes ran
/// - 1: An episode failed or the summary could not be serialized
pub fn handle_experiment(args: ExperimentArgs, config: Config) -> i32 {
    let summary = match run_experiment(&args, &config) {
        Ok(summary) => summary,
        Err(err) => {
            error!(error = %err, "experiment failed");
            return 1;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(error = %err, "failed to serialize summary");
                return 1;
            }
        }
    } else {
        let finished = summary.terminal_rewards.iter().flatten().count();
        println!(
            "episodes: {}  finished: {}  mean terminal reward: {:.3}",
            summary.episodes, finished, summary.mean_terminal_reward
        );
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_args() -> ExperimentArgs {
        ExperimentArgs {
            episodes: 2,
            cycles: 300,
            seed: Some(11),
            json: false,
        }
    }

    #[test]
    fn experiments_replay_from_the_base_seed() {
        let config = Config::default();
        let first = run_experiment(&small_args(), &config).expect("experiment");
        let second = run_experiment(&small_args(), &config).expect("experiment");
        assert_eq!(first, second);
    }

    #[test]
    fn episodes_within_the_bound_report_terminal_rewards() {
        let config = Config::default();
        let summary = run_experiment(&small_args(), &config).expect("experiment");

        assert_eq!(summary.base_seed, 11);
        assert_eq!(summary.terminal_rewards.len(), 2);
        // selection is gated per cell, so a game needs well under 300 cycles
        assert!(summary.terminal_rewards.iter().all(Option::is_some));
        for reward in summary.terminal_rewards.iter().flatten() {
            assert!((-1.0..=1.0).contains(reward));
        }
    }

    #[test]
    fn an_empty_experiment_reports_a_zero_mean() {
        let config = Config::default();
        let args = ExperimentArgs {
            episodes: 0,
            cycles: 10,
            seed: None,
            json: true,
        };
        let summary = run_experiment(&args, &config).expect("experiment");
        assert_eq!(summary.terminal_rewards.len(), 0);
        assert_eq!(summary.mean_terminal_reward, 0.0);
        assert_eq!(summary.base_seed, config.run.seed);
    }
}
