//! Housekeeping: the per-cycle passes that keep every store's activation
//! landscape moving and bounded.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::attention::AttentionCodelet;
use crate::config::HousekeepingConfig;
use crate::global_workspace::GlobalWorkspace;
use crate::memory::workspace::Workspace;
use crate::traits::{Activatable, ActivationKind, ActivationReadout, Identity, Transform};
use crate::types::{Coalition, Percept};

/// Below this, an activation quantity counts as extinguished and the
/// element is eligible for collection.
pub const EPSILON: f32 = 1e-6;

/// Default per-cycle current-activation decrement.
pub const DEFAULT_DECAY_FACTOR: f32 = 0.01;

/// Default base-level reinforcement for broadcast content.
pub const DEFAULT_LEARN_FACTOR: f32 = 0.01;

/// Default base-level erosion applied to everything.
pub const DEFAULT_FORGET_FACTOR: f32 = 0.001;

/// Lowers `current_activation` by a factor each application. Elements
/// declaring their own `decay_rate` use it instead of the pass factor;
/// the transform (identity by default) maps the raw result.
pub struct Decay {
    factor: f32,
    transform: Arc<dyn Transform>,
}

impl Decay {
    pub fn new(factor: f32) -> Self {
        Self {
            factor,
            transform: Arc::new(Identity),
        }
    }

    pub fn with_transform(mut self, transform: impl Transform + 'static) -> Self {
        self.transform = Arc::new(transform);
        self
    }

    pub fn apply<'a, T, I>(&self, items: I)
    where
        T: Activatable + 'a,
        I: IntoIterator<Item = &'a mut T>,
    {
        for item in items {
            let factor = item.decay_rate().unwrap_or(self.factor);
            let next = self.transform.apply(item.current_activation() - factor);
            item.set_current_activation(next);
        }
    }
}

/// Raises `base_level_activation` by a factor: reinforcement for content
/// that reached consciousness.
pub struct Learn {
    factor: f32,
    transform: Arc<dyn Transform>,
}

impl Learn {
    pub fn new(factor: f32) -> Self {
        Self {
            factor,
            transform: Arc::new(Identity),
        }
    }

    pub fn with_transform(mut self, transform: impl Transform + 'static) -> Self {
        self.transform = Arc::new(transform);
        self
    }

    pub fn apply<'a, T, I>(&self, items: I)
    where
        T: Activatable + 'a,
        I: IntoIterator<Item = &'a mut T>,
    {
        for item in items {
            let next = self.transform.apply(item.base_level_activation() + self.factor);
            item.set_base_level_activation(next);
        }
    }
}

/// Lowers `base_level_activation` by a factor: slow erosion of whatever
/// learning built up.
pub struct Forget {
    factor: f32,
    transform: Arc<dyn Transform>,
}

impl Forget {
    pub fn new(factor: f32) -> Self {
        Self {
            factor,
            transform: Arc::new(Identity),
        }
    }

    pub fn with_transform(mut self, transform: impl Transform + 'static) -> Self {
        self.transform = Arc::new(transform);
        self
    }

    pub fn apply<'a, T, I>(&self, items: I)
    where
        T: Activatable + 'a,
        I: IntoIterator<Item = &'a mut T>,
    {
        for item in items {
            let next = self.transform.apply(item.base_level_activation() - self.factor);
            item.set_base_level_activation(next);
        }
    }
}

/// Removes extinguished elements from a store, reading each element by
/// the designated activation kind. Survivor order is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct GarbageCollector;

impl GarbageCollector {
    pub fn collect<T: ActivationReadout>(items: &mut Vec<T>, kind: ActivationKind) -> usize {
        let before = items.len();
        items.retain(|item| item.activation_value(kind) >= EPSILON);
        before - items.len()
    }
}

/// The full end-of-cycle schedule over every mutable store.
///
/// Decay touches the situational model, every attention codelet, and the
/// content and codelet clones inside standing coalitions (clones decay
/// where they live, since nothing is shared by reference). Learning
/// reinforces the situational-model items that were part of this cycle's
/// broadcast; forgetting erodes the whole model. Collection then drops
/// extinguished model content by salience and extinguished coalitions and
/// codelets by activation. Schemes are untouched: their activation is
/// recomputed against every broadcast and there is no scheme deletion
/// path.
pub struct Housekeeping {
    decay: Decay,
    learn: Learn,
    forget: Forget,
}

impl Housekeeping {
    pub fn new(decay: Decay, learn: Learn, forget: Forget) -> Self {
        Self {
            decay,
            learn,
            forget,
        }
    }

    pub fn from_config(config: &HousekeepingConfig) -> Self {
        Self::new(
            Decay::new(config.decay_factor),
            Learn::new(config.learn_factor),
            Forget::new(config.forget_factor),
        )
    }

    pub fn run_cycle(
        &self,
        workspace: &mut Workspace,
        global: &mut GlobalWorkspace,
        codelets: &mut Vec<AttentionCodelet>,
        broadcast: Option<&Coalition>,
    ) {
        self.decay.apply(workspace.csm_mut().content_mut().iter_mut());
        self.decay.apply(codelets.iter_mut());
        for coalition in global.coalitions_mut().iter_mut() {
            self.decay.apply(coalition.content.iter_mut());
            self.decay.apply(std::iter::once(&mut coalition.codelet));
        }

        if let Some(broadcast) = broadcast {
            let conscious: HashSet<&Percept> =
                broadcast.content.iter().map(|c| &c.content).collect();
            self.learn.apply(
                workspace
                    .csm_mut()
                    .content_mut()
                    .iter_mut()
                    .filter(|c| conscious.contains(&c.content)),
            );
        }

        self.forget.apply(workspace.csm_mut().content_mut().iter_mut());

        let collected_content =
            GarbageCollector::collect(workspace.csm_mut().content_mut(), ActivationKind::Salience);
        let collected_coalitions =
            GarbageCollector::collect(global.coalitions_mut(), ActivationKind::Activation);
        let collected_codelets =
            GarbageCollector::collect(codelets, ActivationKind::Activation);
        if collected_content + collected_coalitions + collected_codelets > 0 {
            debug!(
                collected_content,
                collected_coalitions, collected_codelets, "housekeeping collected"
            );
        }
    }
}
