//! Coalitions: content grouped by the codelet that proposed it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::attention::AttentionCodelet;
use crate::traits::{ActivationKind, ActivationReadout};
use crate::types::CognitiveContent;

/// A bid for conscious access: the content an attention codelet selected,
/// paired with a clone of the codelet itself. Structurally immutable once
/// formed; the activation scalars inside keep decaying while the coalition
/// sits in the global workspace, so its competitive strength is always
/// recomputed from current fields.
#[derive(Debug, Clone)]
pub struct Coalition {
    pub id: Uuid,
    pub content: Vec<CognitiveContent>,
    pub codelet: AttentionCodelet,
    pub created_at: DateTime<Utc>,
}

impl Coalition {
    pub fn new(content: Vec<CognitiveContent>, codelet: AttentionCodelet) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            codelet,
            created_at: Utc::now(),
        }
    }

    /// Summed content salience plus the proposing codelet's activation.
    pub fn activation(&self) -> f32 {
        let content: f32 = self.content.iter().map(CognitiveContent::salience).sum();
        content + self.codelet.activation()
    }
}

impl ActivationReadout for Coalition {
    /// Coalitions carry one derived quantity; every kind reads it.
    fn activation_value(&self, _kind: ActivationKind) -> f32 {
        self.activation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attention::CodeletDomain;
    use crate::types::Percept;

    fn any_codelet(base_level: f32) -> AttentionCodelet {
        AttentionCodelet::new("any", CodeletDomain::Csm, |_: &CognitiveContent| true)
            .with_base_level_activation(base_level)
    }

    #[test]
    fn activation_sums_content_salience_and_codelet_activation() {
        let content = vec![
            CognitiveContent::new(Percept::new("cell", "0=X")).with_current_activation(0.5),
            CognitiveContent::new(Percept::new("cell", "1=O"))
                .with_current_activation(0.25)
                .with_current_incentive_salience(0.25),
        ];
        let coalition = Coalition::new(content, any_codelet(1.0));
        // 0.5 + (0.25 + 0.25) + 1.0
        assert!((coalition.activation() - 1.75).abs() < 1e-6);
    }

    #[test]
    fn activation_tracks_later_content_mutation() {
        let content = vec![CognitiveContent::new(Percept::new("cell", "0=X"))
            .with_current_activation(1.0)];
        let mut coalition = Coalition::new(content, any_codelet(0.0));
        let before = coalition.activation();

        coalition.content[0].current_activation = 0.25;
        assert!(coalition.activation() < before);
    }
}
