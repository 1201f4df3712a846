//! Cognitive content: the unit of perceptual and situational state.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::traits::{Activatable, ActivationKind, ActivationReadout};
use crate::types::Percept;

/// A content item circulating through the perceptual scene, the
/// situational model, coalitions, and scheme contexts/results.
///
/// Carries four stored scalars split into a fast-moving `current_*` part
/// (decays every cycle) and a slow `base_level_*` part (reinforced by
/// learning, eroded by forgetting). All composite quantities are computed
/// from the stored fields on every read, never cached:
///
/// * `activation = current_activation + base_level_activation`
/// * `incentive_salience = current + base_level` incentive salience, or
///   `affective_valence * activation` for feeling nodes
/// * `salience = activation + incentive_salience`
///
/// Equality and hashing are defined by the payload alone: two items with
/// the same percept are the same content at different activation states.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitiveContent {
    pub content: Percept,
    pub current_activation: f32,
    pub base_level_activation: f32,
    pub current_incentive_salience: f32,
    pub base_level_incentive_salience: f32,
    /// `Some(+1.0)` or `Some(-1.0)` marks a feeling node.
    pub affective_valence: Option<f32>,
    /// Per-element override of the decay pass factor.
    pub decay_rate: Option<f32>,
}

impl CognitiveContent {
    /// New content with all stored scalars at zero.
    pub fn new(content: Percept) -> Self {
        Self {
            content,
            current_activation: 0.0,
            base_level_activation: 0.0,
            current_incentive_salience: 0.0,
            base_level_incentive_salience: 0.0,
            affective_valence: None,
            decay_rate: None,
        }
    }

    /// A feeling node: content with a fixed affective valence. The valence
    /// must be exactly `+1.0` (appetitive) or `-1.0` (aversive).
    pub fn feeling(content: Percept, affective_valence: f32, activation: f32) -> CoreResult<Self> {
        if affective_valence != 1.0 && affective_valence != -1.0 {
            return Err(CoreError::invalid_input(
                "affective_valence",
                format!("must be +1.0 or -1.0, got {affective_valence}"),
            ));
        }
        Ok(Self {
            current_activation: activation,
            affective_valence: Some(affective_valence),
            ..Self::new(content)
        })
    }

    pub fn with_current_activation(mut self, value: f32) -> Self {
        self.current_activation = value;
        self
    }

    pub fn with_base_level_activation(mut self, value: f32) -> Self {
        self.base_level_activation = value;
        self
    }

    pub fn with_current_incentive_salience(mut self, value: f32) -> Self {
        self.current_incentive_salience = value;
        self
    }

    pub fn with_base_level_incentive_salience(mut self, value: f32) -> Self {
        self.base_level_incentive_salience = value;
        self
    }

    pub fn with_decay_rate(mut self, rate: f32) -> Self {
        self.decay_rate = Some(rate);
        self
    }

    /// Total activation.
    pub fn activation(&self) -> f32 {
        self.current_activation + self.base_level_activation
    }

    /// Total incentive salience. Feeling nodes derive it from their
    /// valence and activation; ordinary content sums its stored parts.
    pub fn incentive_salience(&self) -> f32 {
        match self.affective_valence {
            Some(valence) => valence * self.activation(),
            None => self.current_incentive_salience + self.base_level_incentive_salience,
        }
    }

    /// Competitive strength: activation plus incentive salience.
    pub fn salience(&self) -> f32 {
        self.activation() + self.incentive_salience()
    }

    pub fn is_feeling(&self) -> bool {
        self.affective_valence.is_some()
    }
}

impl PartialEq for CognitiveContent {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl Eq for CognitiveContent {}

impl Hash for CognitiveContent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.content.hash(state);
    }
}

impl Activatable for CognitiveContent {
    fn current_activation(&self) -> f32 {
        self.current_activation
    }

    fn set_current_activation(&mut self, value: f32) {
        self.current_activation = value;
    }

    fn base_level_activation(&self) -> f32 {
        self.base_level_activation
    }

    fn set_base_level_activation(&mut self, value: f32) {
        self.base_level_activation = value;
    }

    fn decay_rate(&self) -> Option<f32> {
        self.decay_rate
    }
}

impl ActivationReadout for CognitiveContent {
    fn activation_value(&self, kind: ActivationKind) -> f32 {
        match kind {
            ActivationKind::Current => self.current_activation,
            ActivationKind::BaseLevel => self.base_level_activation,
            ActivationKind::Activation => self.activation(),
            ActivationKind::IncentiveSalience => self.incentive_salience(),
            ActivationKind::Salience => self.salience(),
        }
    }
}
