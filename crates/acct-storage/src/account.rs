//! Account storage capability traits.

use async_trait::async_trait;

use acct_model::{Account, Claim};

use crate::error::StorageResult;

/// Write operations for an account kind.
///
/// Implementations must be thread-safe. Every mutating operation issues
/// exactly one write against the backing collection after its checks
/// pass; there are no multi-step transactions.
#[async_trait]
pub trait AccountWriter<A: Account>: Send + Sync {
    /// Creates a new account.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if an account with the same
    /// name and a different id already exists, and
    /// `StorageError::InvalidArgument` if the name is empty.
    async fn create(&self, account: &A) -> StorageResult<()>;

    /// Persists the current state of an account, inserting it if it is
    /// not yet stored (upsert matched by id).
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if the name is held by a
    /// different id.
    async fn update(&self, account: &A) -> StorageResult<()>;

    /// Deletes an account by id. Succeeds as a no-op if the id does not
    /// exist.
    async fn delete(&self, account: &A) -> StorageResult<()>;
}

/// Read operations for an account kind.
///
/// The store holds no cache; every read re-fetches from the backing
/// collection.
#[async_trait]
pub trait AccountReader<A: Account>: Send + Sync {
    /// Looks up an account by its textual id.
    ///
    /// Returns `Ok(None)` when the id is empty or unparseable.
    async fn find_by_id(&self, id: &str) -> StorageResult<Option<A>>;

    /// Looks up an account by its normalized name (exact match, no
    /// case folding at query time).
    ///
    /// Returns `Ok(None)` when the input is empty or blank.
    async fn find_by_normalized_name(&self, normalized_name: &str) -> StorageResult<Option<A>>;

    /// Enumerates every stored account.
    ///
    /// The full result set is materialized before returning; intended
    /// only for small deployments.
    async fn list_all(&self) -> StorageResult<Vec<A>>;
}

/// Claim management for an account kind.
///
/// Claim mutations update the caller's in-memory account first and then
/// issue one partial-document write, keeping the two copies consistent.
/// Concurrent mutation of the same in-memory account instance is the
/// caller's to exclude (single writer per instance).
#[async_trait]
pub trait ClaimStore<A: Account>: Send + Sync {
    /// Returns the claims attached to the account (pure read of the
    /// in-memory field).
    async fn claims(&self, account: &A) -> StorageResult<Vec<Claim>>;

    /// Attaches a claim. A claim identical in type and value to one
    /// already present is suppressed (no write issued).
    async fn add_claim(&self, account: &mut A, claim: Claim) -> StorageResult<()>;

    /// Detaches a claim. A claim not present is a no-op (no write
    /// issued).
    async fn remove_claim(&self, account: &mut A, claim: &Claim) -> StorageResult<()>;
}
