//! Rarity labels for cards.
//!
//! Rarity is a free-form string: collectors conventionally use labels
//! like `common`, `uncommon`, `rare`, or `legendary`, but the tracker
//! never enforces a vocabulary. The newtype exists so the label can't
//! be confused with the other string fields on a card.

use serde::{Deserialize, Serialize};

/// Classification label on a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rarity(pub String);

impl Rarity {
    /// Create a new rarity label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Rarity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Rarity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
