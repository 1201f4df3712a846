//! Trait seams of the cycle engine.
//!
//! Every pluggable strategy point is a named single-method trait with a
//! blanket implementation for the matching closure shape, so call sites
//! accept closures, function pointers, and small named structs
//! interchangeably. Traits are `Send + Sync` so strategies can be shared
//! through `Arc` clones.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::action::sensory_motor::MotorCommand;
use crate::memory::sensory::SensoryScene;
use crate::types::{CognitiveContent, Percept};

/// A boolean test over a single item. Attention codelets and content
/// filters are expressed as predicates.
pub trait Predicate<T>: Send + Sync {
    fn test(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// A scalar-to-scalar map applied after every housekeeping arithmetic
/// step (e.g. clamping). The default everywhere is [`Identity`].
pub trait Transform: Send + Sync {
    fn apply(&self, value: f32) -> f32;
}

impl<F> Transform for F
where
    F: Fn(f32) -> f32 + Send + Sync,
{
    fn apply(&self, value: f32) -> f32 {
        self(value)
    }
}

/// The identity transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn apply(&self, value: f32) -> f32 {
        value
    }
}

/// A gating condition on a motor command given the current perceptual
/// scene. A motor plan keeps a command only when every trigger holds.
pub trait Trigger: Send + Sync {
    fn holds(&self, command: &MotorCommand, scene: &SensoryScene) -> bool;
}

impl<F> Trigger for F
where
    F: Fn(&MotorCommand, &SensoryScene) -> bool + Send + Sync,
{
    fn holds(&self, command: &MotorCommand, scene: &SensoryScene) -> bool {
        self(command, scene)
    }
}

/// Picks exactly one command from a filtered candidate list. Takes the
/// RNG as a trait object so choice strategies stay object-safe.
pub trait CommandChoice: Send + Sync {
    fn choose(&self, commands: &[MotorCommand], rng: &mut dyn RngCore) -> Option<MotorCommand>;
}

impl<F> CommandChoice for F
where
    F: Fn(&[MotorCommand], &mut dyn RngCore) -> Option<MotorCommand> + Send + Sync,
{
    fn choose(&self, commands: &[MotorCommand], rng: &mut dyn RngCore) -> Option<MotorCommand> {
        self(commands, rng)
    }
}

/// Match strength between a cue payload and a stored concept payload.
/// Anything mapping two percepts to a scalar qualifies; the perceptual
/// associative memory thresholds the returned strength.
pub trait CueMatcher: Send + Sync {
    fn strength(&self, cue: &Percept, concept: &Percept) -> f32;
}

impl<F> CueMatcher for F
where
    F: Fn(&Percept, &Percept) -> f32 + Send + Sync,
{
    fn strength(&self, cue: &Percept, concept: &Percept) -> f32 {
        self(cue, concept)
    }
}

/// A store the cueing process can query with a content item. Returns the
/// matching entries; empty means no association.
pub trait Cueable {
    fn cue(&self, content: &CognitiveContent) -> Vec<CognitiveContent>;
}

/// Maps a raw sensor reading to at most one content item. Detectors may
/// abstain (e.g. a reward detector on a zero-reward step).
pub trait FeatureDetector<Obs>: Send + Sync {
    fn name(&self) -> &str;
    fn apply(&self, reading: &SensorReading<Obs>) -> Option<CognitiveContent>;
}

/// Read/write access to the two stored activation scalars, used by the
/// decay/learn/forget passes. `decay_rate` lets an element override the
/// pass-wide decay factor.
pub trait Activatable {
    fn current_activation(&self) -> f32;
    fn set_current_activation(&mut self, value: f32);
    fn base_level_activation(&self) -> f32;
    fn set_base_level_activation(&mut self, value: f32);
    fn decay_rate(&self) -> Option<f32> {
        None
    }
}

/// The activation quantities a store element can be read by. Garbage
/// collection and diagnostics name the quantity explicitly instead of
/// looking attributes up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationKind {
    Current,
    BaseLevel,
    Activation,
    IncentiveSalience,
    Salience,
}

/// Read-only activation lookup by [`ActivationKind`]. Types without a
/// given quantity document the value they report for it.
pub trait ActivationReadout {
    fn activation_value(&self, kind: ActivationKind) -> f32;
}

/// How an environment should render itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Print a human-readable view to stdout.
    Human,
    /// Return the raw observation without printing.
    Observation,
}

/// The sensor bundle handed to feature detectors each cycle.
#[derive(Debug, Clone)]
pub struct SensorReading<Obs> {
    pub observation: Obs,
    pub reward: f32,
    pub done: bool,
}

/// Side-channel facts about an environment step. `comment` is the soft
/// failure channel ("illegal action", "post-game action").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    pub state: String,
    pub done: bool,
    pub comment: String,
}

/// Everything an environment reports for one step.
#[derive(Debug, Clone)]
pub struct StepOutcome<Obs> {
    pub observation: Obs,
    pub reward: f32,
    pub done: bool,
    pub info: StepInfo,
}

/// The synchronous world the agent acts in. `step(None)` is a sense-only
/// step; stepping is the only potentially blocking point in a cycle.
pub trait Environment {
    type Obs;

    fn reset(&mut self);
    fn step(&mut self, action: Option<i64>) -> StepOutcome<Self::Obs>;
    fn render(&mut self, mode: RenderMode) -> Option<Self::Obs>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Percept;

    #[test]
    fn closures_satisfy_predicate() {
        let starts_with_cell = |c: &CognitiveContent| c.content.domain == "cell";
        let content = CognitiveContent::new(Percept::new("cell", "0=blank"));
        assert!(starts_with_cell.test(&content));
    }

    #[test]
    fn identity_transform_returns_input() {
        assert_eq!(Identity.apply(0.25), 0.25);
    }

    #[test]
    fn closures_satisfy_cue_matcher() {
        let same_domain =
            |cue: &Percept, concept: &Percept| if cue.domain == concept.domain { 1.0 } else { 0.0 };
        let a = Percept::new("cell", "0=blank");
        let b = Percept::new("cell", "4=X");
        assert_eq!(same_domain.strength(&a, &b), 1.0);
    }
}
