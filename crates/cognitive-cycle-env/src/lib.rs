//! Tic-Tac-Toe Environment Library
//!
//! The playable environment for the cognitive cycle engine plus the
//! domain wiring that assembles a complete tic-tac-toe agent.
//!
//! # Architecture
//!
//! This crate defines:
//! - The nine-cell [`board::Board`] and its closed [`board::Mark`] set
//! - [`env::TicTacToeEnv`], the core `Environment` implementation with
//!   soft-failure semantics for illegal and post-game actions
//! - [`wiring`]: feature detectors, positional concepts, attention
//!   codelets, move schemes, and motor plans, assembled by
//!   [`wiring::build_agent`]
//!
//! # Example
//!
//! ```
//! use cognitive_cycle_core::{Config, RunOptions};
//! use cognitive_cycle_env::{build_agent, TicTacToeEnv};
//!
//! let config = Config::default();
//! let mut agent = build_agent(&config);
//! let mut env = TicTacToeEnv::new(config.run.seed);
//! let summary = agent
//!     .run(&mut env, &RunOptions { cycles: Some(3), render: false })
//!     .expect("cycles run");
//! assert_eq!(summary.cycles, 3);
//! ```

pub mod board;
pub mod env;
pub mod error;
pub mod wiring;

// Re-exports for convenience
pub use board::{Board, Mark, CELL_COUNT, WIN_ZONES};
pub use env::{
    TicTacToeEnv, DRAW_REWARD, ILLEGAL_MOVE_PENALTY, LOSE_REWARD, WIN_REWARD,
};
pub use error::{EnvError, EnvResult};
pub use wiring::build_agent;
