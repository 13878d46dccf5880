//! Generic account abstraction.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::claim::Claim;
use crate::id::AccountId;

/// Canonicalizes a display name for case-insensitive lookup.
///
/// Convenience only: the store never normalizes on its own, keeping the
/// normalized field in sync with the display name is the caller's
/// contract.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Generic view of an account document.
///
/// Implemented by [`User`](crate::User) (whose display name is the
/// username) and [`Role`](crate::Role). The associated constants name
/// the serialized document fields so a storage backend can build filters
/// and partial updates without knowing the concrete kind.
pub trait Account: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// Kind label used in error messages ("User", "Role").
    const KIND: &'static str;

    /// Document field holding the identifier.
    const ID_FIELD: &'static str;

    /// Document field holding the display name.
    const NAME_FIELD: &'static str;

    /// Document field holding the normalized name.
    const NORMALIZED_NAME_FIELD: &'static str;

    /// Document field holding the claims array.
    const CLAIMS_FIELD: &'static str;

    /// Returns the identifier.
    fn id(&self) -> AccountId;

    /// Returns the display name.
    fn name(&self) -> &str;

    /// Returns the normalized name.
    fn normalized_name(&self) -> &str;

    /// Returns the claims attached to this account.
    fn claims(&self) -> &[Claim];

    /// Returns the claims list for mutation.
    fn claims_mut(&mut self) -> &mut Vec<Claim>;
}
