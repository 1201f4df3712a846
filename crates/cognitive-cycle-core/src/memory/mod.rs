//! Memory stores: sensory, perceptual-associative, situational,
//! procedural, and the cueing process that links them.

pub mod cueing;
pub mod pam;
pub mod procedural;
pub mod sensory;
pub mod workspace;

pub use cueing::{merge_cue, CueingProcess};
pub use pam::{ExactMatcher, PerceptualAssociativeMemory, DEFAULT_MATCH_THRESHOLD};
pub use procedural::{ProceduralMemory, DEFAULT_ACTIVATION_THRESHOLD, INSTANTIATION_ACTIVATION};
pub use sensory::{SensoryMemory, SensoryScene};
pub use workspace::{CurrentSituationalModel, Workspace};
