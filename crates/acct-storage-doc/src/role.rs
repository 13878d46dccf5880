//! Document-backed role store.

use acct_model::Role;

use crate::store::DocAccountStore;

/// Role store over a document collection.
///
/// Satisfies [`acct_storage::RoleStore`] through the generic
/// [`DocAccountStore`] implementation.
pub type DocRoleStore<C> = DocAccountStore<Role, C>;
