//! Document-backed user store.

use acct_model::User;
use async_trait::async_trait;

use acct_storage::UserCredentialStore;

use crate::collection::DocumentCollection;
use crate::store::DocAccountStore;

/// User store over a document collection.
///
/// CRUD, lookups, and claim management come from the generic
/// [`DocAccountStore`] implementation. The credential-and-profile
/// surface is declared but not backed here: every
/// [`UserCredentialStore`] method keeps its `NotSupported` default, so
/// callers can detect the gap instead of observing a silent no-op.
pub type DocUserStore<C> = DocAccountStore<User, C>;

#[async_trait]
impl<C> UserCredentialStore for DocAccountStore<User, C> where C: DocumentCollection<User> {}
