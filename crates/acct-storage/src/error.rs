//! Storage error types.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Absence is not an error: reads return `Ok(None)` and deleting a
/// missing id succeeds as a no-op.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Duplicate entity (name collision).
    #[error("duplicate {entity_type}: {field} '{value}' already exists")]
    Duplicate {
        /// Type of entity ("User", "Role").
        entity_type: &'static str,
        /// Field that caused the conflict.
        field: &'static str,
        /// Conflicting value.
        value: String,
    },

    /// Null or empty required input; fails before any I/O is attempted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation attempted after the store was disposed.
    #[error("store has been disposed")]
    Disposed,

    /// Operation declared by the contract but not backed by an
    /// implementation.
    #[error("operation not supported: {0}")]
    NotSupported(&'static str),

    /// Document (de)serialization fault.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Any other underlying collection or driver fault.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(
        entity_type: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::Duplicate {
            entity_type,
            field,
            value: value.into(),
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Checks if this is a duplicate error.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Checks if this is a disposed error.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        matches!(self, Self::Disposed)
    }

    /// Checks if this is a not supported error.
    #[must_use]
    pub const fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported(_))
    }
}

/// Result type for store operations.
pub type StorageResult<T> = Result<T, StorageError>;
