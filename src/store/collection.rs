//! The collection store: ordered cards plus write-through persistence.
//!
//! ## Persistence discipline
//!
//! The whole sequence is serialized and rewritten under one key on every
//! mutation. No deltas, no transactions. Invariant: after any successful
//! `add`, `remove_at`, or `clear`, the persisted payload equals the
//! in-memory sequence exactly.
//!
//! ## Load behavior
//!
//! An absent, unreadable, or malformed payload loads as the empty
//! collection. That is never an error to the caller; it is logged and
//! the store starts fresh.

use tracing::{debug, warn};

use super::backend::StorageBackend;
use super::config::StoreConfig;
use crate::cards::Card;
use crate::error::StorageError;
use crate::stats::CollectionStats;

/// Owner of the ordered card sequence.
///
/// Insertion order is significant: new cards append, and a zero-based
/// index identifies a card for removal. Duplicates are permitted.
///
/// ## Example
///
/// ```
/// use card_binder::{Card, CollectionStore, MemoryBackend};
///
/// let mut store = CollectionStore::with_backend(MemoryBackend::new());
/// let dragon = Card::new("Dragon", "data:image/png;base64,AAAA", "legendary", "25.00", "")?;
/// store.add(dragon)?;
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.stats().total_value_display(), "25.00");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct CollectionStore<B: StorageBackend> {
    cards: Vec<Card>,
    backend: B,
    config: StoreConfig,
}

impl<B: StorageBackend> CollectionStore<B> {
    /// Load the persisted collection, or start empty.
    ///
    /// Never fails outward: storage trouble or a malformed payload
    /// degrades to an empty collection.
    pub fn load(backend: B, config: StoreConfig) -> Self {
        let cards = match backend.read(&config.storage_key) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(cards) => cards,
                Err(err) => {
                    warn!(key = %config.storage_key, "discarding malformed collection payload: {}", err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key = %config.storage_key, "storage unavailable, starting empty: {}", err);
                Vec::new()
            }
        };

        debug!(key = %config.storage_key, "loaded {} cards", cards.len());
        Self {
            cards,
            backend,
            config,
        }
    }

    /// Load with the default configuration.
    pub fn with_backend(backend: B) -> Self {
        Self::load(backend, StoreConfig::default())
    }

    /// Append a card and persist.
    ///
    /// The card is already validated by construction; the only failure
    /// mode is the backend write.
    pub fn add(&mut self, card: Card) -> Result<(), StorageError> {
        self.cards.push(card);
        self.persist()
    }

    /// Remove the card at `index`, persist, and return it.
    ///
    /// An out-of-range index is a guarded no-op returning `None`; the
    /// sequence is never disturbed by a bad index.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<Card>, StorageError> {
        if index >= self.cards.len() {
            warn!("remove_at index {} out of range (len {})", index, self.cards.len());
            return Ok(None);
        }

        let card = self.cards.remove(index);
        self.persist()?;
        Ok(Some(card))
    }

    /// Drop every card and persist the empty collection.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.cards.clear();
        self.persist()
    }

    /// Serialize the whole sequence under the configured key, overwriting
    /// any previous payload.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.cards)?;
        self.backend.write(&self.config.storage_key, &payload)?;
        debug!(key = %self.config.storage_key, "persisted {} cards", self.cards.len());
        Ok(())
    }

    /// Read-only view of the cards in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Current statistics, recomputed from the live sequence.
    #[must_use]
    pub fn stats(&self) -> CollectionStats {
        CollectionStats::of(&self.cards)
    }

    /// Consume the store and hand back its backend.
    ///
    /// Lets a caller reload the same storage with a fresh store, the
    /// equivalent of a new session.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::super::backend::MemoryBackend;
    use super::*;

    fn card(name: &str, value: &str) -> Card {
        Card::new(name, "data:image/png;base64,AAAA", "common", value, "").unwrap()
    }

    #[test]
    fn test_load_from_empty_backend() {
        let store = CollectionStore::with_backend(MemoryBackend::new());
        assert!(store.is_empty());
        assert_eq!(store.stats().count, 0);
    }

    #[test]
    fn test_load_from_malformed_payload() {
        let mut backend = MemoryBackend::new();
        backend.write("cardCollection", "not json at all").unwrap();

        let store = CollectionStore::with_backend(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn test_persisted_payload_matches_sequence() {
        let mut store = CollectionStore::with_backend(MemoryBackend::new());
        store.add(card("Dragon", "25.00")).unwrap();
        store.add(card("Goblin", "0.10")).unwrap();

        let expected = serde_json::to_string(store.all()).unwrap();
        let backend = store.into_backend();
        assert_eq!(
            backend.read("cardCollection").unwrap().as_deref(),
            Some(expected.as_str())
        );
    }

    #[test]
    fn test_custom_storage_key() {
        let config = StoreConfig::new().with_storage_key("altCollection");
        let mut store = CollectionStore::load(MemoryBackend::new(), config);
        store.add(card("Dragon", "1")).unwrap();

        let backend = store.into_backend();
        assert!(backend.read("altCollection").unwrap().is_some());
        assert_eq!(backend.read("cardCollection").unwrap(), None);
    }
}
