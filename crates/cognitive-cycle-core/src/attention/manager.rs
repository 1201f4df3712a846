//! Coalition manager: the staging buffer between codelets and the
//! global workspace.

use tracing::trace;

use crate::attention::AttentionCodelet;
use crate::types::{CognitiveContent, Coalition};

/// Collects the coalitions codelets propose during a cycle. The buffer is
/// read destructively: each cycle's proposals are handed to the global
/// workspace exactly once and never observed twice.
#[derive(Debug, Default)]
pub struct CoalitionManager {
    buffer: Vec<Coalition>,
}

impl CoalitionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts one codelet's selection. Empty content means the codelet
    /// found nothing of interest and no coalition forms.
    pub fn receive(&mut self, codelet: &AttentionCodelet, content: Vec<CognitiveContent>) {
        if content.is_empty() {
            return;
        }
        trace!(codelet = %codelet.name, items = content.len(), "coalition formed");
        self.buffer.push(Coalition::new(content, codelet.clone()));
    }

    /// Drains and returns everything buffered since the last call.
    pub fn take_coalitions(&mut self) -> Vec<Coalition> {
        std::mem::take(&mut self.buffer)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
