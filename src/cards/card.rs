//! The card record - what a collector tracks per card.
//!
//! A `Card` is a plain value: once constructed it carries no identity
//! beyond its position in the collection, and duplicates are allowed.
//! The serialized field names (`name`, `image`, `rarity`, `value`,
//! `description`) are the persisted layout and must not change.
//!
//! ## Value field
//!
//! The monetary value is stored as the text the user entered and parsed
//! on demand. Unparsable text contributes zero to aggregates rather than
//! poisoning the sum.

use serde::{Deserialize, Serialize};

use super::rarity::Rarity;
use crate::error::CardError;

/// One entry in the collection.
///
/// ## Example
///
/// ```
/// use card_binder::cards::Card;
///
/// let card = Card::new(
///     "Dragon",
///     "data:image/png;base64,AAAA",
///     "legendary",
///     "25.00",
///     "",
/// ).unwrap();
///
/// assert_eq!(card.numeric_value(), 25.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Display name. Never empty.
    pub name: String,

    /// Encoded image payload (data URI or similar text encoding).
    pub image: String,

    /// Rarity label (free-form, see `Rarity`).
    pub rarity: Rarity,

    /// Monetary value as entered, kept as text and parsed on demand.
    pub value: String,

    /// Free-form notes. May be empty.
    #[serde(default)]
    pub description: String,
}

impl Card {
    /// Build a card, rejecting input the collection must never hold.
    ///
    /// Name and image are required: an empty (or whitespace-only) name or
    /// a missing image payload is refused here so the store can assume
    /// every card it sees is complete. Rarity, value, and description are
    /// stored as given.
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        rarity: impl Into<Rarity>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CardError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CardError::EmptyName);
        }

        let image = image.into();
        if image.is_empty() {
            return Err(CardError::MissingImage);
        }

        Ok(Self {
            name,
            image,
            rarity: rarity.into(),
            value: value.into(),
            description: description.into(),
        })
    }

    /// Numeric value for aggregation.
    ///
    /// Unparsable or non-finite text counts as zero, keeping sums
    /// well-defined no matter what was entered.
    #[must_use]
    pub fn numeric_value(&self) -> f64 {
        self.value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_name() {
        let result = Card::new("", "data:image/png;base64,AAAA", "common", "1", "");
        assert_eq!(result.unwrap_err(), CardError::EmptyName);

        let result = Card::new("   ", "data:image/png;base64,AAAA", "common", "1", "");
        assert_eq!(result.unwrap_err(), CardError::EmptyName);
    }

    #[test]
    fn test_new_rejects_missing_image() {
        let result = Card::new("Dragon", "", "common", "1", "");
        assert_eq!(result.unwrap_err(), CardError::MissingImage);
    }

    #[test]
    fn test_numeric_value_parses_decimal_text() {
        let card = Card::new("Dragon", "data:x", "rare", "5.50", "").unwrap();
        assert_eq!(card.numeric_value(), 5.5);
    }

    #[test]
    fn test_numeric_value_treats_junk_as_zero() {
        for junk in ["abc", "", "12abc", "NaN", "inf"] {
            let card = Card::new("Dragon", "data:x", "rare", junk, "").unwrap();
            assert_eq!(card.numeric_value(), 0.0, "value {:?}", junk);
        }
    }
}
