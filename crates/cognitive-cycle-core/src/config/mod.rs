//! Layered runtime configuration.
//!
//! Values are resolved in order: `config/default.toml`, then an
//! environment-specific file selected by `COGNITIVE_CYCLE_ENV`
//! (`config/<env>.toml`), then `COGNITIVE_CYCLE__`-prefixed environment
//! variables (`COGNITIVE_CYCLE__RUN__SEED=7`). Every field has a default,
//! so an empty deployment works out of the box.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::attention;
use crate::error::{CoreError, CoreResult};
use crate::housekeeping;
use crate::memory::procedural;

/// Top-level configuration for an agent and its run loop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub run: RunConfig,
    pub housekeeping: HousekeepingConfig,
    pub attention: AttentionConfig,
    pub procedural: ProceduralConfig,
    pub logging: LoggingConfig,
}

/// Run loop bounds and reproducibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Cycles to execute; `None` runs until interrupted.
    pub cycles: Option<u64>,
    /// Render the environment every cycle.
    pub render: bool,
    /// Seed for the agent's deterministic RNG.
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            cycles: None,
            render: false,
            seed: 42,
        }
    }
}

/// Factors for the end-of-cycle passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HousekeepingConfig {
    pub decay_factor: f32,
    pub learn_factor: f32,
    pub forget_factor: f32,
}

impl Default for HousekeepingConfig {
    fn default() -> Self {
        Self {
            decay_factor: housekeeping::DEFAULT_DECAY_FACTOR,
            learn_factor: housekeeping::DEFAULT_LEARN_FACTOR,
            forget_factor: housekeeping::DEFAULT_FORGET_FACTOR,
        }
    }
}

/// Attention codelet defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttentionConfig {
    /// Base level ordinary codelets are created with.
    pub default_base_level_activation: f32,
    /// Decay override for expectation codelets.
    pub expectation_decay_rate: f32,
}

impl Default for AttentionConfig {
    fn default() -> Self {
        Self {
            default_base_level_activation: attention::DEFAULT_BASE_LEVEL_ACTIVATION,
            expectation_decay_rate: 0.5,
        }
    }
}

/// Procedural memory thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProceduralConfig {
    /// Activation a scheme needs to be a candidate behavior.
    pub activation_threshold: f32,
}

impl Default for ProceduralConfig {
    fn default() -> Self {
        Self {
            activation_threshold: procedural::DEFAULT_ACTIVATION_THRESHOLD,
        }
    }
}

/// Logging defaults; the CLI maps verbosity flags on top of this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the layered configuration.
    pub fn load() -> CoreResult<Self> {
        let run_env =
            std::env::var("COGNITIVE_CYCLE_ENV").unwrap_or_else(|_| "development".to_string());
        let raw = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_env}")).required(false))
            .add_source(
                config::Environment::with_prefix("COGNITIVE_CYCLE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;
        let loaded: Self = raw.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Loads exactly one TOML file, no layering.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|err| CoreError::ConfigError(format!("{}: {err}", path.as_ref().display())))?;
        let loaded: Self = toml::from_str(&text)?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Rejects values the cycle arithmetic cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("housekeeping.decay_factor", self.housekeeping.decay_factor),
            ("housekeeping.learn_factor", self.housekeeping.learn_factor),
            ("housekeeping.forget_factor", self.housekeeping.forget_factor),
            ("attention.expectation_decay_rate", self.attention.expectation_decay_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::ConfigError(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !self.procedural.activation_threshold.is_finite() {
            return Err(CoreError::ConfigError(format!(
                "procedural.activation_threshold must be finite, got {}",
                self.procedural.activation_threshold
            )));
        }
        if !self.attention.default_base_level_activation.is_finite() {
            return Err(CoreError::ConfigError(format!(
                "attention.default_base_level_activation must be finite, got {}",
                self.attention.default_base_level_activation
            )));
        }
        Ok(())
    }
}
