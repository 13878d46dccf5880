//! The injected document-collection interface.
//!
//! Filters and updates are plain descriptors over top-level document
//! fields; a backend translates them onto whatever wire protocol it
//! speaks. Only the shapes the store actually issues are modeled.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by a document collection.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A write violated a unique index.
    #[error("duplicate key on '{field}': '{value}' already exists")]
    DuplicateKey {
        /// Indexed field that rejected the write.
        field: String,
        /// Conflicting value.
        value: String,
    },

    /// Document (de)serialization fault.
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other backend fault (connection, protocol, ...).
    #[error("collection backend error: {0}")]
    Backend(String),
}

/// Result type for collection operations.
pub type DocResult<T> = Result<T, DocumentError>;

/// A query filter over top-level document fields.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Matches every document.
    All,
    /// Matches documents whose field equals the value.
    Eq(String, Value),
    /// Matches documents whose field differs from the value.
    Ne(String, Value),
    /// Matches documents satisfying every sub-filter.
    And(Vec<Filter>),
}

impl Filter {
    /// Equality on a field.
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq(field.into(), value.into())
    }

    /// Inequality on a field.
    #[must_use]
    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Ne(field.into(), value.into())
    }

    /// Conjunction of filters.
    #[must_use]
    pub fn and(filters: Vec<Filter>) -> Self {
        Self::And(filters)
    }
}

/// A single update operation against a document.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOp {
    /// Sets a field to a value.
    Set {
        /// Field to set.
        field: String,
        /// New value.
        value: Value,
    },
    /// Appends one element to an array field.
    Push {
        /// Array field.
        field: String,
        /// Element to append.
        value: Value,
    },
    /// Appends several elements to an array field.
    PushEach {
        /// Array field.
        field: String,
        /// Elements to append.
        values: Vec<Value>,
    },
    /// Removes every element equal to the value from an array field.
    Pull {
        /// Array field.
        field: String,
        /// Element to remove.
        value: Value,
    },
    /// Removes every element equal to any of the values from an array
    /// field.
    PullAll {
        /// Array field.
        field: String,
        /// Elements to remove.
        values: Vec<Value>,
    },
}

/// An ordered list of update operations, applied in sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    ops: Vec<UpdateOp>,
}

impl Update {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a set-field operation.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.ops.push(UpdateOp::Set {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Adds an append-to-array operation.
    #[must_use]
    pub fn push(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.ops.push(UpdateOp::Push {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Adds an append-many-to-array operation.
    #[must_use]
    pub fn push_each(mut self, field: impl Into<String>, values: Vec<Value>) -> Self {
        self.ops.push(UpdateOp::PushEach {
            field: field.into(),
            values,
        });
        self
    }

    /// Adds a remove-matching-element operation.
    #[must_use]
    pub fn pull(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.ops.push(UpdateOp::Pull {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a remove-all-matching operation.
    #[must_use]
    pub fn pull_all(mut self, field: impl Into<String>, values: Vec<Value>) -> Self {
        self.ops.push(UpdateOp::PullAll {
            field: field.into(),
            values,
        });
        self
    }

    /// Returns the operations in application order.
    #[must_use]
    pub fn ops(&self) -> &[UpdateOp] {
        &self.ops
    }
}

/// Options for find operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindOptions {
    /// Tolerate partial results from a degraded backend.
    pub allow_partial_results: bool,
}

/// Capability interface onto a single document collection.
///
/// The account store consumes exactly this surface, so it can run
/// against a real driver or an in-memory fake interchangeably.
/// Implementations must be thread-safe; per-document atomicity of each
/// operation is the backend's responsibility.
#[async_trait]
pub trait DocumentCollection<T>: Send + Sync
where
    T: Send + Sync + Serialize + DeserializeOwned,
{
    /// Returns every document matching the filter.
    async fn find(&self, filter: &Filter, options: FindOptions) -> DocResult<Vec<T>>;

    /// Returns the first document matching the filter.
    async fn find_one(&self, filter: &Filter) -> DocResult<Option<T>>;

    /// Inserts a document.
    ///
    /// ## Errors
    ///
    /// Returns `DocumentError::DuplicateKey` if the document violates a
    /// unique index.
    async fn insert_one(&self, document: &T) -> DocResult<()>;

    /// Replaces the first document matching the filter. With `upsert`,
    /// inserts the document when nothing matches.
    async fn replace_one(&self, filter: &Filter, document: &T, upsert: bool) -> DocResult<()>;

    /// Deletes the first document matching the filter, returning the
    /// number of documents removed (0 or 1).
    async fn delete_one(&self, filter: &Filter) -> DocResult<u64>;

    /// Applies an update to the first document matching the filter,
    /// returning the number of documents modified (0 or 1).
    async fn update_one(&self, filter: &Filter, update: &Update) -> DocResult<u64>;

    /// Ensures a unique index exists on the given field.
    ///
    /// ## Errors
    ///
    /// Returns `DocumentError::DuplicateKey` if existing documents
    /// already conflict on the field.
    async fn ensure_unique_index(&self, field: &str) -> DocResult<()>;
}
