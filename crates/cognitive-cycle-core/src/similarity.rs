//! Payload-set similarity.

use std::collections::HashSet;

use crate::types::{CognitiveContent, Percept};

/// Jaccard similarity between two content collections, treated as
/// unordered sets of payloads. Returns 0.0 when either side is absent and
/// when both sets are empty (an empty union confirms nothing), otherwise
/// `|A ∩ B| / |A ∪ B|`.
///
/// Duplicate payloads collapse before the ratio is taken, so repeated
/// entries can never inflate a match.
pub fn match_pct(a: Option<&[CognitiveContent]>, b: Option<&[CognitiveContent]>) -> f32 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    let a: HashSet<&Percept> = a.iter().map(|c| &c.content).collect();
    let b: HashSet<&Percept> = b.iter().map(|c| &c.content).collect();

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();
    intersection as f32 / union as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Percept;

    fn contents(symbols: &[&str]) -> Vec<CognitiveContent> {
        symbols
            .iter()
            .map(|s| CognitiveContent::new(Percept::new("cell", *s)))
            .collect()
    }

    #[test]
    fn missing_side_matches_nothing() {
        let a = contents(&["0=X"]);
        assert_eq!(match_pct(None, Some(&a)), 0.0);
        assert_eq!(match_pct(Some(&a), None), 0.0);
        assert_eq!(match_pct(None, None), 0.0);
    }

    #[test]
    fn identical_nonempty_sets_match_fully() {
        let a = contents(&["0=X", "1=O", "2=blank"]);
        assert_eq!(match_pct(Some(&a), Some(&a)), 1.0);
    }

    #[test]
    fn match_is_symmetric() {
        let a = contents(&["0=X", "1=O", "2=blank"]);
        let b = contents(&["1=O", "3=X"]);
        assert_eq!(match_pct(Some(&a), Some(&b)), match_pct(Some(&b), Some(&a)));
    }

    #[test]
    fn partial_overlap_is_jaccard() {
        let a = contents(&["0=X", "1=O"]);
        let b = contents(&["1=O", "2=X"]);
        // intersection {1=O}, union {0=X, 1=O, 2=X}
        assert!((match_pct(Some(&a), Some(&b)) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn duplicates_do_not_inflate_the_ratio() {
        let a = contents(&["0=X", "0=X", "1=O"]);
        let b = contents(&["0=X", "1=O"]);
        assert_eq!(match_pct(Some(&a), Some(&b)), 1.0);
    }

    #[test]
    fn both_empty_matches_nothing() {
        let a = contents(&[]);
        let b = contents(&[]);
        assert_eq!(match_pct(Some(&a), Some(&b)), 0.0);
    }

    #[test]
    fn activation_state_does_not_affect_matching() {
        let hot: Vec<CognitiveContent> = contents(&["0=X"])
            .into_iter()
            .map(|c| c.with_current_activation(5.0))
            .collect();
        let cold = contents(&["0=X"]);
        assert_eq!(match_pct(Some(&hot), Some(&cold)), 1.0);
    }
}
