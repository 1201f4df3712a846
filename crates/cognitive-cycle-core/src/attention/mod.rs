//! Attention: codelets that watch the workspace and the manager that
//! turns their selections into coalitions.

pub mod codelet;
pub mod manager;

pub use codelet::{
    AttentionCodelet, CodeletDomain, ExpectationBinding, DEFAULT_BASE_LEVEL_ACTIVATION,
    EXPECTATION_INITIAL_ACTIVATION,
};
pub use manager::CoalitionManager;
