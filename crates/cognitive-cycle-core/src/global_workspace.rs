//! The global workspace: where coalitions compete for the broadcast.

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::types::Coalition;

/// How many broadcast records the workspace keeps for diagnostics.
pub const BROADCAST_HISTORY_CAP: usize = 100;

/// One broadcast decision, kept for inspection.
#[derive(Debug, Clone)]
pub struct BroadcastRecord {
    pub coalition_id: Uuid,
    pub activation: f32,
    pub at: DateTime<Utc>,
}

/// Accumulates coalitions across cycles and answers the one question that
/// matters each cycle: which coalition is conscious right now.
///
/// Coalitions persist until housekeeping collects them, so a strong
/// coalition can keep winning over several cycles while it decays.
#[derive(Debug, Default)]
pub struct GlobalWorkspace {
    coalitions: Vec<Coalition>,
    history: Vec<BroadcastRecord>,
}

impl GlobalWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends this cycle's proposals. Order of arrival is preserved; it
    /// is the tie-break order of every later competition.
    pub fn receive_coalitions(&mut self, batch: Vec<Coalition>) {
        self.coalitions.extend(batch);
    }

    /// The winner of the competition: the coalition with maximal
    /// activation, the first-encountered one on ties, or `None` when the
    /// workspace is empty. Activations are recomputed at read time, so
    /// the answer always reflects current decay state.
    pub fn broadcast(&self) -> Option<&Coalition> {
        let mut best: Option<(&Coalition, f32)> = None;
        for coalition in &self.coalitions {
            let activation = coalition.activation();
            let beats = best.map_or(true, |(_, current)| activation > current);
            if beats {
                best = Some((coalition, activation));
            }
        }
        best.map(|(coalition, _)| coalition)
    }

    /// Notes a broadcast decision in the bounded history.
    pub fn record_broadcast(&mut self, winner: &Coalition) {
        debug!(
            coalition = %winner.id,
            codelet = %winner.codelet.name,
            activation = winner.activation(),
            "broadcast selected"
        );
        self.history.push(BroadcastRecord {
            coalition_id: winner.id,
            activation: winner.activation(),
            at: Utc::now(),
        });
        if self.history.len() > BROADCAST_HISTORY_CAP {
            let excess = self.history.len() - BROADCAST_HISTORY_CAP;
            self.history.drain(..excess);
        }
    }

    pub fn coalitions(&self) -> &[Coalition] {
        &self.coalitions
    }

    pub fn coalitions_mut(&mut self) -> &mut Vec<Coalition> {
        &mut self.coalitions
    }

    pub fn history(&self) -> &[BroadcastRecord] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.coalitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coalitions.is_empty()
    }
}
