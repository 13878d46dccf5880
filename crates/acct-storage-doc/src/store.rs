//! Generic account store over a document collection.

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use acct_model::{Account, AccountId, Claim};
use acct_storage::{AccountReader, AccountWriter, ClaimStore, StorageError, StorageResult};

use crate::collection::{DocumentCollection, DocumentError, Filter, FindOptions, Update};
use crate::options::StoreOptions;

/// Account store implementation over an injected [`DocumentCollection`].
///
/// Generic over the account kind, so [`DocUserStore`](crate::DocUserStore)
/// and [`DocRoleStore`](crate::DocRoleStore) share one implementation.
/// The collection is shared ownership: disposing the store never closes
/// it.
pub struct DocAccountStore<A, C> {
    collection: Arc<C>,
    options: StoreOptions,
    disposed: AtomicBool,
    _marker: PhantomData<fn() -> A>,
}

impl<A, C> DocAccountStore<A, C>
where
    A: Account,
    C: DocumentCollection<A>,
{
    /// Creates a store over the given collection with default options.
    #[must_use]
    pub fn new(collection: Arc<C>) -> Self {
        Self::with_options(collection, StoreOptions::default())
    }

    /// Creates a store over the given collection.
    #[must_use]
    pub fn with_options(collection: Arc<C>, options: StoreOptions) -> Self {
        Self {
            collection,
            options,
            disposed: AtomicBool::new(false),
            _marker: PhantomData,
        }
    }

    /// Creates the indexes the store relies on; call once at startup.
    ///
    /// The unique index on the normalized-name field is the
    /// authoritative guard against concurrent same-name writes slipping
    /// past the pre-write duplicate query.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if existing documents already
    /// conflict on the normalized name.
    pub async fn ensure_indexes(&self) -> StorageResult<()> {
        self.ensure_open()?;
        if self.options.unique_name_index {
            self.collection
                .ensure_unique_index(A::NORMALIZED_NAME_FIELD)
                .await
                .map_err(map_doc_error::<A>)?;
        }
        Ok(())
    }

    /// Marks the store disposed; every subsequent call fails with
    /// `StorageError::Disposed`. The underlying collection stays open.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    /// Whether the store has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> StorageResult<()> {
        if self.is_disposed() {
            return Err(StorageError::Disposed);
        }
        Ok(())
    }

    fn id_filter(account: &A) -> Filter {
        Filter::eq(A::ID_FIELD, account.id().to_string())
    }

    /// Fast-path duplicate query: another document holding this name
    /// under a different id. Racy on its own; the unique index has the
    /// final say.
    async fn assert_name_available(&self, account: &A) -> StorageResult<()> {
        let filter = Filter::and(vec![
            Filter::ne(A::ID_FIELD, account.id().to_string()),
            Filter::eq(A::NAME_FIELD, account.name()),
        ]);
        let existing = self
            .collection
            .find_one(&filter)
            .await
            .map_err(map_doc_error::<A>)?;
        if existing.is_some() {
            return Err(StorageError::duplicate(A::KIND, "name", account.name()));
        }
        Ok(())
    }

    fn claim_value(claim: &Claim) -> StorageResult<serde_json::Value> {
        serde_json::to_value(claim).map_err(|err| StorageError::Serialization(err.to_string()))
    }
}

/// Translates a collection fault into a store error.
///
/// A duplicate-key rejection from the unique index becomes the same
/// `Duplicate` error the pre-write query produces.
fn map_doc_error<A: Account>(err: DocumentError) -> StorageError {
    match err {
        DocumentError::DuplicateKey { value, .. } => {
            tracing::warn!(kind = A::KIND, value = %value, "unique index rejected write");
            StorageError::duplicate(A::KIND, "name", value)
        }
        DocumentError::Serialization(err) => StorageError::Serialization(err.to_string()),
        DocumentError::Backend(message) => StorageError::Backend(message),
    }
}

#[async_trait]
impl<A, C> AccountWriter<A> for DocAccountStore<A, C>
where
    A: Account,
    C: DocumentCollection<A>,
{
    async fn create(&self, account: &A) -> StorageResult<()> {
        self.ensure_open()?;
        if account.name().trim().is_empty() {
            return Err(StorageError::invalid_argument("account name must not be empty"));
        }
        self.assert_name_available(account).await?;
        self.collection
            .insert_one(account)
            .await
            .map_err(map_doc_error::<A>)?;
        tracing::debug!(kind = A::KIND, id = %account.id(), "account created");
        Ok(())
    }

    async fn update(&self, account: &A) -> StorageResult<()> {
        self.ensure_open()?;
        if account.name().trim().is_empty() {
            return Err(StorageError::invalid_argument("account name must not be empty"));
        }
        self.assert_name_available(account).await?;
        self.collection
            .replace_one(&Self::id_filter(account), account, true)
            .await
            .map_err(map_doc_error::<A>)?;
        tracing::debug!(kind = A::KIND, id = %account.id(), "account updated");
        Ok(())
    }

    async fn delete(&self, account: &A) -> StorageResult<()> {
        self.ensure_open()?;
        let removed = self
            .collection
            .delete_one(&Self::id_filter(account))
            .await
            .map_err(map_doc_error::<A>)?;
        tracing::debug!(kind = A::KIND, id = %account.id(), removed, "account deleted");
        Ok(())
    }
}

#[async_trait]
impl<A, C> AccountReader<A> for DocAccountStore<A, C>
where
    A: Account,
    C: DocumentCollection<A>,
{
    async fn find_by_id(&self, id: &str) -> StorageResult<Option<A>> {
        self.ensure_open()?;
        let Some(id) = AccountId::parse_lenient(id) else {
            return Ok(None);
        };
        self.collection
            .find_one(&Filter::eq(A::ID_FIELD, id.to_string()))
            .await
            .map_err(map_doc_error::<A>)
    }

    async fn find_by_normalized_name(&self, normalized_name: &str) -> StorageResult<Option<A>> {
        self.ensure_open()?;
        if normalized_name.trim().is_empty() {
            return Ok(None);
        }
        self.collection
            .find_one(&Filter::eq(A::NORMALIZED_NAME_FIELD, normalized_name))
            .await
            .map_err(map_doc_error::<A>)
    }

    async fn list_all(&self) -> StorageResult<Vec<A>> {
        self.ensure_open()?;
        self.collection
            .find(&Filter::All, FindOptions::default())
            .await
            .map_err(map_doc_error::<A>)
    }
}

#[async_trait]
impl<A, C> ClaimStore<A> for DocAccountStore<A, C>
where
    A: Account,
    C: DocumentCollection<A>,
{
    async fn claims(&self, account: &A) -> StorageResult<Vec<Claim>> {
        self.ensure_open()?;
        Ok(account.claims().to_vec())
    }

    async fn add_claim(&self, account: &mut A, claim: Claim) -> StorageResult<()> {
        self.ensure_open()?;
        if account.claims().contains(&claim) {
            return Ok(());
        }
        let value = Self::claim_value(&claim)?;
        // In-memory first, then the persisted copy gets the same append.
        account.claims_mut().push(claim);
        self.collection
            .update_one(
                &Self::id_filter(account),
                &Update::new().push(A::CLAIMS_FIELD, value),
            )
            .await
            .map_err(map_doc_error::<A>)?;
        Ok(())
    }

    async fn remove_claim(&self, account: &mut A, claim: &Claim) -> StorageResult<()> {
        self.ensure_open()?;
        if !account.claims().contains(claim) {
            return Ok(());
        }
        let value = Self::claim_value(claim)?;
        account.claims_mut().retain(|existing| existing != claim);
        self.collection
            .update_one(
                &Self::id_filter(account),
                &Update::new().pull(A::CLAIMS_FIELD, value),
            )
            .await
            .map_err(map_doc_error::<A>)?;
        Ok(())
    }
}
