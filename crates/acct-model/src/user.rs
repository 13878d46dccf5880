//! User domain model.
//!
//! Users are the primary identity entities. Besides the name and claims
//! every account carries, a user holds the credential and profile fields
//! of the broader store contract (password hash, security stamp, lockout
//! state, email, phone, two-factor flag).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::{Account, normalize_name};
use crate::claim::Claim;
use crate::id::AccountId;

/// A user account document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, immutable after creation.
    pub id: AccountId,
    /// Login name.
    pub username: String,
    /// Canonical (uppercased) username, maintained by the caller.
    pub normalized_username: String,
    /// Claims attached to this user.
    pub claims: Vec<Claim>,

    /// Email address.
    pub email: Option<String>,
    /// Whether the email address has been confirmed.
    pub email_confirmed: bool,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Whether the phone number has been confirmed.
    pub phone_number_confirmed: bool,

    /// Hashed password, managed by the consuming framework.
    pub password_hash: Option<String>,
    /// Security stamp, rotated by the framework on credential changes.
    pub security_stamp: Option<String>,
    /// End of the current lockout window, if any.
    pub lockout_end: Option<DateTime<Utc>>,
    /// Whether lockout applies to this user.
    pub lockout_enabled: bool,
    /// Consecutive failed access attempts.
    pub access_failed_count: i32,
    /// Whether two-factor authentication is enabled.
    pub two_factor_enabled: bool,

    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a freshly assigned id.
    ///
    /// The normalized username is initialized from the username; keeping
    /// it in sync afterwards is the caller's responsibility.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        let normalized_username = normalize_name(&username);
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            username,
            normalized_username,
            claims: Vec::new(),
            email: None,
            email_confirmed: false,
            phone_number: None,
            phone_number_confirmed: false,
            password_hash: None,
            security_stamp: None,
            lockout_end: None,
            lockout_enabled: false,
            access_failed_count: 0,
            two_factor_enabled: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Attaches a claim.
    #[must_use]
    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }

    /// Checks whether an identical claim is already attached.
    #[must_use]
    pub fn has_claim(&self, claim: &Claim) -> bool {
        self.claims.contains(claim)
    }

    /// Checks whether the user is locked out at the given instant.
    #[must_use]
    pub fn is_locked_out(&self, now: DateTime<Utc>) -> bool {
        self.lockout_enabled && self.lockout_end.is_some_and(|end| end > now)
    }

    /// Bumps the updated-at timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Account for User {
    const KIND: &'static str = "User";
    const ID_FIELD: &'static str = "id";
    const NAME_FIELD: &'static str = "username";
    const NORMALIZED_NAME_FIELD: &'static str = "normalized_username";
    const CLAIMS_FIELD: &'static str = "claims";

    fn id(&self) -> AccountId {
        self.id
    }

    fn name(&self) -> &str {
        &self.username
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_username
    }

    fn claims(&self) -> &[Claim] {
        &self.claims
    }

    fn claims_mut(&mut self) -> &mut Vec<Claim> {
        &mut self.claims
    }
}
