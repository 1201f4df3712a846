//! The workspace: perceptual scene plus the current situational model.

use crate::attention::CodeletDomain;
use crate::memory::sensory::SensoryScene;
use crate::types::CognitiveContent;

/// The preconscious content pool. An ordered sequence that only grows
/// between garbage collections; items enter from the scene and from cue
/// merging, and only the collector removes them. May briefly hold
/// payload-equal entries; set arithmetic downstream collapses those.
#[derive(Debug, Default)]
pub struct CurrentSituationalModel {
    content: Vec<CognitiveContent>,
}

impl CurrentSituationalModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, content: CognitiveContent) {
        self.content.push(content);
    }

    pub fn extend(&mut self, content: impl IntoIterator<Item = CognitiveContent>) {
        self.content.extend(content);
    }

    pub fn content(&self) -> &[CognitiveContent] {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut Vec<CognitiveContent> {
        &mut self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Owns the two content pools attention codelets read: the transient
/// perceptual scene of the current cycle and the persistent situational
/// model. Receiving a scene replaces the old one and copies the new
/// percepts into the situational model, so scene cueing and model cueing
/// each see this cycle's percepts in their own store.
#[derive(Debug, Default)]
pub struct Workspace {
    scene: SensoryScene,
    csm: CurrentSituationalModel,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receive_scene(&mut self, scene: SensoryScene) {
        self.csm.extend(scene.content.iter().cloned());
        self.scene = scene;
    }

    pub fn scene(&self) -> &SensoryScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SensoryScene {
        &mut self.scene
    }

    pub fn csm(&self) -> &CurrentSituationalModel {
        &self.csm
    }

    pub fn csm_mut(&mut self) -> &mut CurrentSituationalModel {
        &mut self.csm
    }

    /// The content a codelet with the given domain reads.
    pub fn domain_content(&self, domain: CodeletDomain) -> &[CognitiveContent] {
        match domain {
            CodeletDomain::Scene => &self.scene.content,
            CodeletDomain::Csm => self.csm.content(),
        }
    }
}
