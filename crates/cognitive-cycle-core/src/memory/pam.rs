//! Perceptual associative memory: the concept store cueing queries hit.

use std::sync::Arc;

use tracing::trace;

use crate::traits::{CueMatcher, Cueable};
use crate::types::{CognitiveContent, Percept};

/// Minimum match strength for a concept to count as a cue hit.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.5;

/// Exact payload identity; the default matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl CueMatcher for ExactMatcher {
    fn strength(&self, cue: &Percept, concept: &Percept) -> f32 {
        if cue == concept {
            1.0
        } else {
            0.0
        }
    }
}

/// Stores concept content and answers cue queries: every stored concept
/// whose match strength against the cue payload reaches the threshold is
/// returned as a clone. An empty answer is the no-association case and
/// leaves the cued store untouched.
pub struct PerceptualAssociativeMemory {
    concepts: Vec<CognitiveContent>,
    matcher: Arc<dyn CueMatcher>,
    match_threshold: f32,
}

impl PerceptualAssociativeMemory {
    pub fn new(matcher: impl CueMatcher + 'static) -> Self {
        Self {
            concepts: Vec::new(),
            matcher: Arc::new(matcher),
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    pub fn with_concepts(mut self, concepts: Vec<CognitiveContent>) -> Self {
        self.concepts = concepts;
        self
    }

    pub fn with_match_threshold(mut self, threshold: f32) -> Self {
        self.match_threshold = threshold;
        self
    }

    pub fn add_concept(&mut self, concept: CognitiveContent) {
        self.concepts.push(concept);
    }

    pub fn concepts(&self) -> &[CognitiveContent] {
        &self.concepts
    }
}

impl Default for PerceptualAssociativeMemory {
    fn default() -> Self {
        Self::new(ExactMatcher)
    }
}

impl Cueable for PerceptualAssociativeMemory {
    fn cue(&self, content: &CognitiveContent) -> Vec<CognitiveContent> {
        let matches: Vec<CognitiveContent> = self
            .concepts
            .iter()
            .filter(|concept| {
                self.matcher.strength(&content.content, &concept.content) >= self.match_threshold
            })
            .cloned()
            .collect();
        if !matches.is_empty() {
            trace!(cue = %content.content, matches = matches.len(), "cue hit");
        }
        matches
    }
}
