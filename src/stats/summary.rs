//! Summary figures over a card collection.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Derived statistics for a card sequence.
///
/// Projected fresh from the cards on every call - nothing here is cached
/// or maintained incrementally. Cards whose value text doesn't parse as
/// a finite number contribute zero to the total.
///
/// ## Example
///
/// ```
/// use card_binder::{Card, CollectionStats};
///
/// let cards = vec![
///     Card::new("Dragon", "data:x", "legendary", "10", "")?,
///     Card::new("Goblin", "data:x", "common", "5.50", "")?,
///     Card::new("Smudge", "data:x", "common", "abc", "")?,
/// ];
///
/// let stats = CollectionStats::of(&cards);
/// assert_eq!(stats.count, 3);
/// assert_eq!(stats.total_value_display(), "15.50");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    /// Number of cards in the collection.
    pub count: usize,

    /// Sum of every card's parsed value.
    pub total_value: f64,
}

impl CollectionStats {
    /// Project statistics from a card sequence.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        Self {
            count: cards.len(),
            total_value: cards.iter().map(Card::numeric_value).sum(),
        }
    }

    /// Total value formatted for display, two decimal places.
    #[must_use]
    pub fn total_value_display(&self) -> String {
        format!("{:.2}", self.total_value)
    }
}

impl std::fmt::Display for CollectionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} cards, total value {:.2}", self.count, self.total_value)
    }
}
