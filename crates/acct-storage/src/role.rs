//! Combined role store contract.

use acct_model::Role;

use crate::account::{AccountReader, AccountWriter, ClaimStore};

/// Full contract for a role store: CRUD, lookups, and claim management.
///
/// Blanket-implemented for any type providing all three capabilities.
pub trait RoleStore: AccountWriter<Role> + AccountReader<Role> + ClaimStore<Role> {}

impl<T> RoleStore for T where T: AccountWriter<Role> + AccountReader<Role> + ClaimStore<Role> {}
