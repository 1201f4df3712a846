//! Cueing: querying associative stores with current content and folding
//! the answers back in.

use tracing::trace;

use crate::memory::workspace::Workspace;
use crate::traits::Cueable;
use crate::types::CognitiveContent;

/// Folds a cue answer into a content store.
///
/// A non-empty answer *replaces* the cueing item: the first payload-equal
/// occurrence of `original` is removed and the matches are appended, each
/// with its `current_activation` set to the original's. Activation is
/// transferred, never amplified; an empty answer leaves the store
/// untouched.
pub fn merge_cue(
    original: &CognitiveContent,
    mut matches: Vec<CognitiveContent>,
    contents: &mut Vec<CognitiveContent>,
) {
    if matches.is_empty() {
        return;
    }
    if let Some(position) = contents.iter().position(|c| c == original) {
        contents.remove(position);
    }
    for matched in &mut matches {
        matched.current_activation = original.current_activation;
    }
    contents.append(&mut matches);
}

/// Runs the two cueing passes of a cycle: first every scene item, then
/// every situational-model item, each against every cueable store. The
/// scene pass completes before the model pass reads the model's current
/// contents, and each pass iterates a snapshot so merges during the pass
/// are safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct CueingProcess;

impl CueingProcess {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, workspace: &mut Workspace, cueables: &[&dyn Cueable]) {
        Self::cue_store(&mut workspace.scene_mut().content, cueables);
        Self::cue_store(workspace.csm_mut().content_mut(), cueables);
    }

    fn cue_store(contents: &mut Vec<CognitiveContent>, cueables: &[&dyn Cueable]) {
        let snapshot = contents.clone();
        for item in &snapshot {
            for cueable in cueables {
                let matches = cueable.cue(item);
                if !matches.is_empty() {
                    trace!(cue = %item.content, matches = matches.len(), "merging cue answer");
                }
                merge_cue(item, matches, contents);
            }
        }
    }
}
