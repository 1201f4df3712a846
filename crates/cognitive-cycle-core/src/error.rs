//! Error types for the cognitive cycle engine.

use thiserror::Error;

/// Core error type covering every failure the cycle can surface.
///
/// Soft failures (an illegal environment action, an empty broadcast, an
/// empty candidate set) are not errors; they travel through reward/info
/// channels or `Option`/empty returns and downstream stages skip them.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A required value is structurally absent or violates a closed value
    /// set (e.g. an affective valence outside `{+1.0, -1.0}`, or a motor
    /// plan requested for a `None` behavior).
    #[error("invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// A motor command named an actuator nothing registered a handler for.
    #[error("no actuator registered for '{actuator}'")]
    UnexpectedActuator { actuator: String },

    /// A selected behavior's action has no motor plan template. This is a
    /// configuration-time contract violation, not a runtime soft failure.
    #[error("no motor plan template for action key '{key}'")]
    MissingTemplate { key: String },

    /// Configuration loading or validation failed.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

/// Result alias used throughout the core.
pub type CoreResult<T> = Result<T, CoreError>;
