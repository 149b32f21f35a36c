//! Error types for card construction and storage backends.
//!
//! The error surface is deliberately small: load-time corruption is not
//! an error at all (the store degrades to an empty collection), so only
//! two things can actually fail - building a card from bad input, and
//! writing the serialized collection out.

use thiserror::Error;

/// Failures while persisting or reading the serialized collection.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (file backends).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The in-memory collection could not be serialized for writing.
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Rejection reasons from the `Card` constructor.
///
/// Required fields are enforced here, at the boundary, so the store
/// itself never sees an invalid card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    /// The display name was empty or whitespace-only.
    #[error("card name must not be empty")]
    EmptyName,

    /// No image payload was supplied.
    #[error("card image payload is required")]
    MissingImage,
}
