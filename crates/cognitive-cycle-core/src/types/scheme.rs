//! Procedural schemes and the actions they carry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::CognitiveContent;

/// Action kind the motor layer keys by position value rather than name.
pub const MOVE_KIND: &str = "move";

/// What a scheme does when executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub kind: String,
    pub value: i64,
}

impl Action {
    pub fn new(kind: impl Into<String>, value: i64) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }

    /// A positional move action.
    pub fn move_to(value: i64) -> Self {
        Self::new(MOVE_KIND, value)
    }

    /// The motor-plan lookup key: position for moves, name otherwise.
    pub fn motor_key(&self) -> MotorPlanKey {
        if self.kind == MOVE_KIND {
            MotorPlanKey::Position(self.value)
        } else {
            MotorPlanKey::Named(self.kind.clone())
        }
    }
}

/// Key a motor plan template is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotorPlanKey {
    Position(i64),
    Named(String),
}

impl std::fmt::Display for MotorPlanKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Position(value) => write!(f, "position {value}"),
            Self::Named(kind) => write!(f, "action '{kind}'"),
        }
    }
}

/// A context → action → result unit of procedural memory.
///
/// `context == None` marks a template: a scheme that matches any broadcast
/// and spawns concrete copies of itself instead of being activated in
/// place. Templates are never consumed or deleted, so a template may spawn
/// a new concrete scheme on every broadcast it sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scheme {
    pub id: Uuid,
    pub context: Option<Vec<CognitiveContent>>,
    pub action: Action,
    pub result: Option<Vec<CognitiveContent>>,
    pub current_activation: f32,
    pub base_level_activation: f32,
}

impl Scheme {
    /// A template scheme for the given action.
    pub fn template(action: Action) -> Self {
        Self {
            id: Uuid::new_v4(),
            context: None,
            action,
            result: None,
            current_activation: 0.0,
            base_level_activation: 0.0,
        }
    }

    pub fn is_template(&self) -> bool {
        self.context.is_none()
    }

    pub fn activation(&self) -> f32 {
        self.current_activation + self.base_level_activation
    }

    /// Value copy with a fresh identity. Duplication is how schemes are
    /// instantiated and how learning appends refined copies; the source
    /// scheme is never mutated structurally after creation.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            ..self.clone()
        }
    }
}
