//! # card-binder
//!
//! A card-collection tracker core: an ordered, persisted list of
//! trading-card records plus derived statistics.
//!
//! ## Design
//!
//! 1. **Write-through persistence**: every mutation rewrites the whole
//!    serialized collection under one storage key. No deltas, no caching
//!    divergence between memory and storage.
//!
//! 2. **Injectable storage**: `CollectionStore` is generic over
//!    `StorageBackend`, so the same store runs against a file on disk,
//!    an in-memory map in tests, or an embedder's own keyed storage.
//!
//! 3. **Validated at the boundary**: `Card::new` rejects incomplete
//!    input (empty name, missing image) so the store never holds an
//!    invalid card.
//!
//! 4. **Stats on demand**: `CollectionStats` is projected fresh from the
//!    card sequence on every call.
//!
//! ## Usage
//!
//! ```
//! use card_binder::{Card, CollectionStore, MemoryBackend};
//!
//! let mut store = CollectionStore::with_backend(MemoryBackend::new());
//!
//! let dragon = Card::new(
//!     "Dragon",
//!     "data:image/png;base64,AAAA",
//!     "legendary",
//!     "25.00",
//!     "Breathes fire.",
//! )?;
//! store.add(dragon)?;
//!
//! let stats = store.stats();
//! assert_eq!(stats.count, 1);
//! assert_eq!(stats.total_value_display(), "25.00");
//!
//! store.remove_at(0)?;
//! assert!(store.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - `cards`: the `Card` record and `Rarity` label
//! - `store`: `CollectionStore`, storage backends, configuration
//! - `stats`: derived count/total-value figures
//! - `error`: crate error types

pub mod cards;
pub mod error;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use crate::cards::{Card, Rarity};
pub use crate::error::{CardError, StorageError};
pub use crate::stats::CollectionStats;
pub use crate::store::{
    CollectionStore, FileBackend, MemoryBackend, StorageBackend, StoreConfig,
    DEFAULT_STORAGE_KEY,
};
