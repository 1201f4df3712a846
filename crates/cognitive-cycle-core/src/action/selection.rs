//! Action selection: picking one behavior from the candidates.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::types::{CognitiveContent, Scheme};

/// Holds the current cycle's candidate behaviors and selects among them
/// by value. Receiving a new candidate set overwrites the previous one;
/// candidates never persist across cycles.
#[derive(Debug, Default)]
pub struct ActionSelection {
    behaviors: Vec<Scheme>,
}

/// A behavior's selection value: its own activation plus the incentive
/// salience of everything it is expected to bring about. Behaviors
/// without a recorded result are valued on activation alone.
pub fn behavior_value(behavior: &Scheme) -> f32 {
    let result: f32 = behavior
        .result
        .as_ref()
        .map(|r| r.iter().map(CognitiveContent::incentive_salience).sum())
        .unwrap_or(0.0);
    behavior.activation() + result
}

impl ActionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receive_behaviors(&mut self, behaviors: Vec<Scheme>) {
        self.behaviors = behaviors;
    }

    pub fn behaviors(&self) -> &[Scheme] {
        &self.behaviors
    }

    /// The value-maximal behavior, chosen uniformly at random among exact
    /// ties so equally valued behaviors are equally likely over time.
    /// `None` when no candidates arrived this cycle.
    pub fn selected_behavior<R: Rng>(&self, rng: &mut R) -> Option<Scheme> {
        if self.behaviors.is_empty() {
            return None;
        }
        let values: Vec<f32> = self.behaviors.iter().map(behavior_value).collect();
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let tied: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == max)
            .map(|(i, _)| i)
            .collect();
        let index = *tied.choose(rng)?;
        let selected = self.behaviors[index].clone();
        debug!(
            action = %selected.action.kind,
            value = selected.action.value,
            candidates = self.behaviors.len(),
            tied = tied.len(),
            "behavior selected"
        );
        Some(selected)
    }
}
