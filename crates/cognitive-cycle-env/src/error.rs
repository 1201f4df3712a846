//! Environment error types.

use thiserror::Error;

use cognitive_cycle_core::CoreError;

/// Errors specific to the game environment.
#[derive(Debug, Error)]
pub enum EnvError {
    /// An observation cell held a value outside the closed mark set.
    #[error("invalid board mark {value}, expected -1, 0, or 1")]
    InvalidMark { value: i8 },
}

impl From<EnvError> for CoreError {
    fn from(err: EnvError) -> Self {
        CoreError::invalid_input("board", err.to_string())
    }
}

/// Result alias for environment operations.
pub type EnvResult<T> = Result<T, EnvError>;
