//! Core data records: percepts, content, schemes, coalitions.

pub mod coalition;
pub mod content;
pub mod percept;
pub mod scheme;

pub use coalition::Coalition;
pub use content::CognitiveContent;
pub use percept::Percept;
pub use scheme::{Action, MotorPlanKey, Scheme, MOVE_KIND};
