//! Derived statistics over the collection.
//!
//! Count and total value, recomputed on demand. At this scale there is
//! nothing to cache: projection is a single pass over the card slice.

pub mod summary;

pub use summary::CollectionStats;
