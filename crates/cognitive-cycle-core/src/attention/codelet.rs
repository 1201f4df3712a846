//! Attention codelets: the processes that propose coalitions.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::memory::workspace::Workspace;
use crate::traits::{Activatable, ActivationKind, ActivationReadout, Predicate};
use crate::types::{CognitiveContent, Percept, Scheme};

/// Base-level activation an ordinary codelet is created with. It keeps
/// the codelet's total activation above the collection threshold no
/// matter how far its current activation decays.
pub const DEFAULT_BASE_LEVEL_ACTIVATION: f32 = 1.0;

/// Current activation an expectation codelet starts with. Combined with
/// a zero base level and a steep decay rate, an unconfirmed expectation
/// is collectable within two cycles.
pub const EXPECTATION_INITIAL_ACTIVATION: f32 = 1.0;

/// Which workspace pool a codelet reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeletDomain {
    /// The persistent situational model.
    Csm,
    /// The current cycle's perceptual scene.
    Scene,
}

/// Marks a codelet as the expectation of a selected behavior, bound to
/// the scheme whose result it is watching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectationBinding {
    pub scheme_id: Uuid,
}

/// An independent observer of one workspace pool. Each cycle it selects
/// the content its predicate holds for and offers it to the coalition
/// manager as one coalition.
#[derive(Clone)]
pub struct AttentionCodelet {
    pub id: Uuid,
    pub name: String,
    pub domain: CodeletDomain,
    pub current_activation: f32,
    pub base_level_activation: f32,
    /// Overrides the decay pass factor when set.
    pub decay_rate: Option<f32>,
    /// Present on expectation codelets only.
    pub expectation: Option<ExpectationBinding>,
    select: Arc<dyn Predicate<CognitiveContent>>,
}

impl AttentionCodelet {
    pub fn new(
        name: impl Into<String>,
        domain: CodeletDomain,
        select: impl Predicate<CognitiveContent> + 'static,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            domain,
            current_activation: 0.0,
            base_level_activation: DEFAULT_BASE_LEVEL_ACTIVATION,
            decay_rate: None,
            expectation: None,
            select: Arc::new(select),
        }
    }

    pub fn with_current_activation(mut self, value: f32) -> Self {
        self.current_activation = value;
        self
    }

    pub fn with_base_level_activation(mut self, value: f32) -> Self {
        self.base_level_activation = value;
        self
    }

    pub fn with_decay_rate(mut self, rate: f32) -> Self {
        self.decay_rate = Some(rate);
        self
    }

    /// The expectation codelet for a just-selected behavior. It watches
    /// the situational model for the scheme's expected result, snapshotted
    /// here; while the scheme has no result yet the expectation is open
    /// and matches the whole pool, which is what lets the first
    /// confirmation ever reach the learning rule. Fades fast: full
    /// current activation, zero base level, steep decay.
    pub fn expectation(scheme: &Scheme, decay_rate: f32) -> Self {
        let expected: Option<HashSet<Percept>> = scheme
            .result
            .as_ref()
            .map(|result| result.iter().map(|c| c.content.clone()).collect());
        let select = move |content: &CognitiveContent| match &expected {
            Some(set) => set.contains(&content.content),
            None => true,
        };
        let name = format!("expectation({} {})", scheme.action.kind, scheme.action.value);
        let mut codelet = Self::new(name, CodeletDomain::Csm, select);
        codelet.current_activation = EXPECTATION_INITIAL_ACTIVATION;
        codelet.base_level_activation = 0.0;
        codelet.decay_rate = Some(decay_rate);
        codelet.expectation = Some(ExpectationBinding {
            scheme_id: scheme.id,
        });
        codelet
    }

    pub fn activation(&self) -> f32 {
        self.current_activation + self.base_level_activation
    }

    /// Every element of this codelet's domain its predicate holds for.
    /// Empty is the ordinary no-interest outcome.
    pub fn apply(&self, workspace: &Workspace) -> Vec<CognitiveContent> {
        workspace
            .domain_content(self.domain)
            .iter()
            .filter(|content| self.select.test(content))
            .cloned()
            .collect()
    }

    pub fn is_expectation(&self) -> bool {
        self.expectation.is_some()
    }
}

impl fmt::Debug for AttentionCodelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttentionCodelet")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("domain", &self.domain)
            .field("current_activation", &self.current_activation)
            .field("base_level_activation", &self.base_level_activation)
            .field("decay_rate", &self.decay_rate)
            .field("expectation", &self.expectation)
            .finish_non_exhaustive()
    }
}

impl Activatable for AttentionCodelet {
    fn current_activation(&self) -> f32 {
        self.current_activation
    }

    fn set_current_activation(&mut self, value: f32) {
        self.current_activation = value;
    }

    fn base_level_activation(&self) -> f32 {
        self.base_level_activation
    }

    fn set_base_level_activation(&mut self, value: f32) {
        self.base_level_activation = value;
    }

    fn decay_rate(&self) -> Option<f32> {
        self.decay_rate
    }
}

impl ActivationReadout for AttentionCodelet {
    /// Codelets carry no incentive salience; salience reads as activation.
    fn activation_value(&self, kind: ActivationKind) -> f32 {
        match kind {
            ActivationKind::Current => self.current_activation,
            ActivationKind::BaseLevel => self.base_level_activation,
            ActivationKind::Activation | ActivationKind::Salience => self.activation(),
            ActivationKind::IncentiveSalience => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::sensory::SensoryScene;
    use crate::types::{Action, CognitiveContent};

    fn workspace_with(symbols: &[&str]) -> Workspace {
        let mut workspace = Workspace::new();
        workspace.receive_scene(SensoryScene::new(
            symbols
                .iter()
                .map(|s| CognitiveContent::new(Percept::new("cell", *s)))
                .collect(),
        ));
        workspace
    }

    #[test]
    fn apply_filters_the_domain_by_predicate() {
        let workspace = workspace_with(&["0=blank", "1=X", "2=blank"]);
        let codelet = AttentionCodelet::new("blank-cells", CodeletDomain::Scene, |c: &CognitiveContent| {
            c.content.symbol.ends_with("=blank")
        });

        let selected = codelet.apply(&workspace);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn no_interest_is_an_empty_selection() {
        let workspace = workspace_with(&["1=X"]);
        let codelet = AttentionCodelet::new("blank-cells", CodeletDomain::Scene, |c: &CognitiveContent| {
            c.content.symbol.ends_with("=blank")
        });

        assert!(codelet.apply(&workspace).is_empty());
    }

    #[test]
    fn ordinary_codelets_default_to_a_persistent_base_level() {
        let codelet = AttentionCodelet::new("any", CodeletDomain::Csm, |_: &CognitiveContent| true);
        assert_eq!(codelet.base_level_activation, DEFAULT_BASE_LEVEL_ACTIVATION);
        assert!(codelet.decay_rate.is_none());
        assert!(!codelet.is_expectation());
    }

    #[test]
    fn open_expectation_matches_everything() {
        let scheme = Scheme::template(Action::move_to(4));
        let codelet = AttentionCodelet::expectation(&scheme, 0.5);

        assert!(codelet.is_expectation());
        assert_eq!(codelet.base_level_activation, 0.0);
        assert_eq!(codelet.decay_rate, Some(0.5));
        assert_eq!(codelet.domain, CodeletDomain::Csm);

        let workspace = workspace_with(&["0=X", "1=O"]);
        // scene content was copied into the model, so the codelet sees it
        assert_eq!(codelet.apply(&workspace).len(), 2);
    }

    #[test]
    fn bound_expectation_matches_only_the_expected_result() {
        let mut scheme = Scheme::template(Action::move_to(4));
        scheme.result = Some(vec![CognitiveContent::new(Percept::new("cell", "4=X"))]);
        let codelet = AttentionCodelet::expectation(&scheme, 0.5);

        let workspace = workspace_with(&["4=X", "0=O"]);
        let selected = codelet.apply(&workspace);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].content, Percept::new("cell", "4=X"));
    }

    #[test]
    fn expectation_snapshot_survives_later_learning() {
        // learning appends a refined copy elsewhere; the bound scheme's
        // result never changes, so the snapshot taken here stays accurate
        let mut scheme = Scheme::template(Action::move_to(4));
        scheme.result = Some(vec![CognitiveContent::new(Percept::new("cell", "4=X"))]);
        let codelet = AttentionCodelet::expectation(&scheme, 0.5);

        scheme.result = None; // local mutation of the caller's copy
        let workspace = workspace_with(&["4=X", "0=O"]);
        assert_eq!(codelet.apply(&workspace).len(), 1);
    }
}
