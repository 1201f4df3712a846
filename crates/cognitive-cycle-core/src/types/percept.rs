//! Symbolic payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The hashable symbolic payload every content item wraps. All equality,
/// hashing, and set arithmetic in the engine operate on percept values,
/// so payload-equal content items are interchangeable wherever membership
/// or dedup matters.
///
/// `domain` names the percept family (`cell`, `concept`, `feeling`),
/// `symbol` the specific value within it (`4=X`, `center`, `reward`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Percept {
    pub domain: String,
    pub symbol: String,
}

impl Percept {
    pub fn new(domain: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for Percept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain, self.symbol)
    }
}
