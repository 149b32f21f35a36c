//! Collection storage: the store itself, its backends, and configuration.
//!
//! ## Key Types
//!
//! - `CollectionStore`: owns the ordered card sequence, write-through
//!   persisted on every mutation
//! - `StorageBackend`: keyed text storage the store writes into
//! - `MemoryBackend` / `FileBackend`: the bundled backends
//! - `StoreConfig`: storage key selection

pub mod backend;
pub mod collection;
pub mod config;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use collection::CollectionStore;
pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
