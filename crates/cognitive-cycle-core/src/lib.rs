//! Cognitive Cycle Core Library
//!
//! A complete cognitive cycle in the global-workspace style: sensory
//! content competes for attention, the winning coalition is broadcast,
//! and the broadcast drives procedural learning and action selection.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`Percept`, `CognitiveContent`, `Scheme`, `Coalition`)
//! - Memory stores (sensory, perceptual-associative, situational,
//!   procedural) and the cueing process that links them
//! - Attention codelets, coalition formation, and the global workspace
//! - Action selection and the sensory-motor system
//! - Per-cycle housekeeping (decay, reinforcement, forgetting,
//!   garbage collection)
//! - The [`cycle::Agent`] context that wires one agent to one
//!   environment and drives the cycle
//!
//! # Example
//!
//! ```
//! use cognitive_cycle_core::types::{CognitiveContent, Percept};
//!
//! let content = CognitiveContent::new(Percept::new("cell", "4=blank"))
//!     .with_current_activation(1.0);
//! assert_eq!(content.salience(), 1.0);
//! ```

pub mod action;
pub mod attention;
pub mod config;
pub mod cycle;
pub mod error;
pub mod global_workspace;
pub mod housekeeping;
pub mod memory;
pub mod similarity;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use cycle::{Agent, CycleOutcome, RunOptions, RunSummary};
pub use error::{CoreError, CoreResult};
pub use global_workspace::GlobalWorkspace;
pub use types::{CognitiveContent, Coalition, Percept, Scheme};
