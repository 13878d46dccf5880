//! Combined user store contract and the credential-and-profile surface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use acct_model::User;

use crate::account::{AccountReader, AccountWriter, ClaimStore};
use crate::error::{StorageError, StorageResult};

/// Credential and profile operations declared by the broader user store
/// contract.
///
/// Every method defaults to `StorageError::NotSupported` so a backend
/// that does not implement a capability fails loudly instead of
/// silently succeeding as a no-op; callers can distinguish "feature
/// absent" from "feature failed". Backends override the subset they
/// actually support.
#[async_trait]
pub trait UserCredentialStore: Send + Sync {
    /// Links an external login (identity provider, provider key) to the
    /// user.
    async fn add_login(
        &self,
        user: &mut User,
        provider: &str,
        provider_key: &str,
    ) -> StorageResult<()> {
        let _ = (user, provider, provider_key);
        Err(StorageError::NotSupported("external login linking"))
    }

    /// Removes an external login from the user.
    async fn remove_login(
        &self,
        user: &mut User,
        provider: &str,
        provider_key: &str,
    ) -> StorageResult<()> {
        let _ = (user, provider, provider_key);
        Err(StorageError::NotSupported("external login linking"))
    }

    /// Finds the user linked to an external login.
    async fn find_by_login(
        &self,
        provider: &str,
        provider_key: &str,
    ) -> StorageResult<Option<User>> {
        let _ = (provider, provider_key);
        Err(StorageError::NotSupported("external login lookup"))
    }

    /// Adds the user to the named role.
    async fn add_to_role(&self, user: &mut User, normalized_role_name: &str) -> StorageResult<()> {
        let _ = (user, normalized_role_name);
        Err(StorageError::NotSupported("role membership"))
    }

    /// Removes the user from the named role.
    async fn remove_from_role(
        &self,
        user: &mut User,
        normalized_role_name: &str,
    ) -> StorageResult<()> {
        let _ = (user, normalized_role_name);
        Err(StorageError::NotSupported("role membership"))
    }

    /// Checks whether the user is a member of the named role.
    async fn is_in_role(&self, user: &User, normalized_role_name: &str) -> StorageResult<bool> {
        let _ = (user, normalized_role_name);
        Err(StorageError::NotSupported("role membership"))
    }

    /// Enumerates the users in the named role.
    async fn users_in_role(&self, normalized_role_name: &str) -> StorageResult<Vec<User>> {
        let _ = normalized_role_name;
        Err(StorageError::NotSupported("role membership"))
    }

    /// Stores the password hash.
    async fn set_password_hash(&self, user: &mut User, hash: Option<String>) -> StorageResult<()> {
        let _ = (user, hash);
        Err(StorageError::NotSupported("password hash storage"))
    }

    /// Returns the stored password hash.
    async fn password_hash(&self, user: &User) -> StorageResult<Option<String>> {
        let _ = user;
        Err(StorageError::NotSupported("password hash storage"))
    }

    /// Checks whether the user has a password set.
    async fn has_password(&self, user: &User) -> StorageResult<bool> {
        let _ = user;
        Err(StorageError::NotSupported("password hash storage"))
    }

    /// Stores the security stamp.
    async fn set_security_stamp(&self, user: &mut User, stamp: String) -> StorageResult<()> {
        let _ = (user, stamp);
        Err(StorageError::NotSupported("security stamp"))
    }

    /// Returns the security stamp.
    async fn security_stamp(&self, user: &User) -> StorageResult<Option<String>> {
        let _ = user;
        Err(StorageError::NotSupported("security stamp"))
    }

    /// Returns the end of the current lockout window.
    async fn lockout_end(&self, user: &User) -> StorageResult<Option<DateTime<Utc>>> {
        let _ = user;
        Err(StorageError::NotSupported("lockout"))
    }

    /// Sets the end of the lockout window.
    async fn set_lockout_end(
        &self,
        user: &mut User,
        end: Option<DateTime<Utc>>,
    ) -> StorageResult<()> {
        let _ = (user, end);
        Err(StorageError::NotSupported("lockout"))
    }

    /// Increments and returns the failed access counter.
    async fn increment_access_failed(&self, user: &mut User) -> StorageResult<i32> {
        let _ = user;
        Err(StorageError::NotSupported("lockout"))
    }

    /// Resets the failed access counter.
    async fn reset_access_failed(&self, user: &mut User) -> StorageResult<()> {
        let _ = user;
        Err(StorageError::NotSupported("lockout"))
    }

    /// Sets the email address.
    async fn set_email(&self, user: &mut User, email: Option<String>) -> StorageResult<()> {
        let _ = (user, email);
        Err(StorageError::NotSupported("email"))
    }

    /// Finds a user by normalized email address.
    async fn find_by_email(&self, normalized_email: &str) -> StorageResult<Option<User>> {
        let _ = normalized_email;
        Err(StorageError::NotSupported("email lookup"))
    }

    /// Sets the email confirmation flag.
    async fn set_email_confirmed(&self, user: &mut User, confirmed: bool) -> StorageResult<()> {
        let _ = (user, confirmed);
        Err(StorageError::NotSupported("email"))
    }

    /// Sets the phone number.
    async fn set_phone_number(&self, user: &mut User, phone: Option<String>) -> StorageResult<()> {
        let _ = (user, phone);
        Err(StorageError::NotSupported("phone number"))
    }

    /// Sets the phone confirmation flag.
    async fn set_phone_number_confirmed(
        &self,
        user: &mut User,
        confirmed: bool,
    ) -> StorageResult<()> {
        let _ = (user, confirmed);
        Err(StorageError::NotSupported("phone number"))
    }

    /// Sets the two-factor flag.
    async fn set_two_factor_enabled(&self, user: &mut User, enabled: bool) -> StorageResult<()> {
        let _ = (user, enabled);
        Err(StorageError::NotSupported("two-factor flag"))
    }

    /// Returns the two-factor flag.
    async fn two_factor_enabled(&self, user: &User) -> StorageResult<bool> {
        let _ = user;
        Err(StorageError::NotSupported("two-factor flag"))
    }
}

/// Full contract for a user store: CRUD, lookups, claim management, and
/// the credential-and-profile surface.
///
/// Blanket-implemented for any type providing all four capabilities.
pub trait UserStore:
    AccountWriter<User> + AccountReader<User> + ClaimStore<User> + UserCredentialStore
{
}

impl<T> UserStore for T where
    T: AccountWriter<User> + AccountReader<User> + ClaimStore<User> + UserCredentialStore
{
}
