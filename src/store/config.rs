//! Store configuration.

/// Default key the serialized collection is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "cardCollection";

/// Configuration for a `CollectionStore`.
///
/// There is exactly one knob today: the storage key the serialized
/// collection lives under. Embedders running several collections against
/// one backend give each its own key.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Key the serialized collection is persisted under.
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
