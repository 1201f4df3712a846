//! Procedural memory: schemes, their activation, and the learning rule.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::{debug, warn};

use crate::similarity::match_pct;
use crate::types::{Coalition, Scheme};

/// Activation a freshly instantiated scheme starts with.
pub const INSTANTIATION_ACTIVATION: f32 = 1.0;

/// Default cutoff for a scheme to count as a candidate behavior.
pub const DEFAULT_ACTIVATION_THRESHOLD: f32 = 1.0;

/// The scheme store. Templates (schemes without a context) spawn concrete
/// copies bound to broadcast content; concrete schemes are re-scored
/// against every broadcast. Schemes are never deleted, so the store keeps
/// the complete procedural history of a run.
pub struct ProceduralMemory {
    schemes: Vec<Scheme>,
    activation_threshold: f32,
}

impl ProceduralMemory {
    pub fn new(activation_threshold: f32) -> Self {
        Self {
            schemes: Vec::new(),
            activation_threshold,
        }
    }

    pub fn add_scheme(&mut self, scheme: Scheme) {
        self.schemes.push(scheme);
    }

    pub fn add_schemes(&mut self, schemes: impl IntoIterator<Item = Scheme>) {
        self.schemes.extend(schemes);
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn activation_threshold(&self) -> f32 {
        self.activation_threshold
    }

    /// Consumes one conscious broadcast: re-scores every scheme against
    /// it, and, when the broadcast was proposed by an expectation codelet,
    /// applies the learning rule for the scheme that codelet is bound to.
    /// `None` (an empty competition) is a no-op.
    pub fn receive_broadcast(&mut self, broadcast: Option<&Coalition>) {
        let Some(broadcast) = broadcast else {
            return;
        };
        self.activate_schemes(broadcast);
        if let Some(binding) = &broadcast.codelet.expectation {
            self.learn_result(binding.scheme_id, broadcast);
        }
    }

    /// One pass over a snapshot of the store. Templates spawn a concrete
    /// duplicate whose context is the broadcast content and whose
    /// activation starts at [`INSTANTIATION_ACTIVATION`]; the template
    /// itself is left untouched and stays eligible on every later
    /// broadcast. Concrete schemes are re-scored to the Jaccard overlap
    /// between their context and the broadcast. Copies appended during the
    /// pass are not revisited.
    fn activate_schemes(&mut self, broadcast: &Coalition) {
        let existing = self.schemes.len();
        let mut spawned = Vec::new();
        for scheme in &mut self.schemes[..existing] {
            if scheme.is_template() {
                let mut concrete = scheme.duplicate();
                concrete.current_activation = INSTANTIATION_ACTIVATION;
                concrete.context = Some(broadcast.content.clone());
                spawned.push(concrete);
            } else {
                scheme.current_activation =
                    match_pct(scheme.context.as_deref(), Some(&broadcast.content));
            }
        }
        if !spawned.is_empty() {
            debug!(spawned = spawned.len(), total = existing + spawned.len(), "instantiated template schemes");
            self.schemes.append(&mut spawned);
        }
    }

    /// The learning rule. When the bound scheme has no recorded result, or
    /// its recorded result does not fully match what consciousness
    /// actually reported, append a duplicate whose result is the broadcast
    /// content. The bound scheme itself is never rewritten.
    fn learn_result(&mut self, scheme_id: uuid::Uuid, broadcast: &Coalition) {
        let Some(index) = self.schemes.iter().position(|s| s.id == scheme_id) else {
            warn!(%scheme_id, "expectation bound to an unknown scheme; skipping learning");
            return;
        };
        let needs_refinement = match &self.schemes[index].result {
            None => true,
            Some(result) => match_pct(Some(result), Some(&broadcast.content)) < 1.0,
        };
        if !needs_refinement {
            return;
        }
        let mut learned = self.schemes[index].duplicate();
        learned.result = Some(broadcast.content.clone());
        debug!(
            from = %scheme_id,
            to = %learned.id,
            result_len = broadcast.content.len(),
            "learned scheme result from broadcast"
        );
        self.schemes.push(learned);
    }

    /// The behaviors handed to action selection: every scheme at or above
    /// the activation threshold. When nothing clears the bar and the store
    /// is non-empty, a single scheme is sampled with probability
    /// `softmax(activation)` so action selection always has something to
    /// work with once any scheme exists.
    pub fn candidate_behaviors<R: Rng>(&self, rng: &mut R) -> Vec<Scheme> {
        let above: Vec<Scheme> = self
            .schemes
            .iter()
            .filter(|s| s.activation() >= self.activation_threshold)
            .cloned()
            .collect();
        if !above.is_empty() {
            return above;
        }
        if self.schemes.is_empty() {
            return Vec::new();
        }
        vec![self.sample_softmax(rng)]
    }

    fn sample_softmax<R: Rng>(&self, rng: &mut R) -> Scheme {
        // max-shifted exponentials keep the weights finite
        let max = self
            .schemes
            .iter()
            .map(Scheme::activation)
            .fold(f32::NEG_INFINITY, f32::max);
        let weights: Vec<f32> = self
            .schemes
            .iter()
            .map(|s| (s.activation() - max).exp())
            .collect();
        match WeightedIndex::new(&weights) {
            Ok(dist) => self.schemes[dist.sample(rng)].clone(),
            Err(err) => {
                warn!(%err, "degenerate softmax weights; sampling uniformly");
                self.schemes[rng.gen_range(0..self.schemes.len())].clone()
            }
        }
    }
}
