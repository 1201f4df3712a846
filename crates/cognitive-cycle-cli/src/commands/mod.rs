//! Command handlers for the cognitive cycle CLI.
//!
//! - `run`: Play one episode
//! - `experiment`: Repeat seeded episodes and aggregate rewards

pub mod experiment;
pub mod run;
