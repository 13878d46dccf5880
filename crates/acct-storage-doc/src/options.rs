//! Store configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a document-backed account store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Whether `ensure_indexes` registers the unique index on the
    /// normalized-name field.
    ///
    /// Disable when index management is handled externally (e.g., by a
    /// deployment migration); name uniqueness is then only guarded by
    /// the racy pre-write query.
    pub unique_name_index: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            unique_name_index: true,
        }
    }
}
