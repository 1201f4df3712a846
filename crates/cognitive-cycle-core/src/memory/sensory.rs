//! Sensory memory: raw readings in, a perceptual scene out.

use tracing::trace;

use crate::traits::{FeatureDetector, SensorReading};
use crate::types::{CognitiveContent, Percept};

/// One cycle's worth of percepts, rebuilt from scratch on every reading.
#[derive(Debug, Clone, Default)]
pub struct SensoryScene {
    pub content: Vec<CognitiveContent>,
}

impl SensoryScene {
    pub fn new(content: Vec<CognitiveContent>) -> Self {
        Self { content }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CognitiveContent> {
        self.content.iter()
    }

    /// Payload membership test, used by motor triggers.
    pub fn contains(&self, percept: &Percept) -> bool {
        self.content.iter().any(|c| &c.content == percept)
    }
}

/// Fans a sensor reading out to every registered feature detector and
/// collects the percepts they produce into a scene. Detector order is
/// registration order, which fixes scene order and with it every
/// downstream iteration-order tie-break.
pub struct SensoryMemory<Obs> {
    detectors: Vec<Box<dyn FeatureDetector<Obs>>>,
}

impl<Obs> SensoryMemory<Obs> {
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    pub fn register_detector(&mut self, detector: impl FeatureDetector<Obs> + 'static) {
        self.detectors.push(Box::new(detector));
    }

    pub fn detector_count(&self) -> usize {
        self.detectors.len()
    }

    pub fn sense(&self, reading: &SensorReading<Obs>) -> SensoryScene {
        let mut content = Vec::with_capacity(self.detectors.len());
        for detector in &self.detectors {
            if let Some(item) = detector.apply(reading) {
                trace!(detector = detector.name(), percept = %item.content, "detector fired");
                content.push(item);
            }
        }
        SensoryScene::new(content)
    }
}

impl<Obs> Default for SensoryMemory<Obs> {
    fn default() -> Self {
        Self::new()
    }
}
