//! Typed account identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a textual identifier cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid account id: '{0}'")]
pub struct ParseIdError(String);

/// Unique identifier for an account.
///
/// Assigned at creation and immutable thereafter. Converts two ways to a
/// canonical string form (hyphenated lowercase) via [`FromStr`] and
/// [`fmt::Display`], for use in textual lookups such as URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generates a new identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parses a textual identifier, returning `None` for empty or
    /// malformed input.
    ///
    /// Lookups by textual id treat an unparseable id as "not found"
    /// rather than an error.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Option<Self> {
        if value.trim().is_empty() {
            return None;
        }
        Uuid::parse_str(value.trim()).ok().map(Self)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for AccountId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s).ok_or_else(|| ParseIdError(s.to_string()))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.as_hyphenated().fmt(f)
    }
}
