//! Authorization claims.

use serde::{Deserialize, Serialize};

/// A (type, value) pair attached to an account.
///
/// Claims are opaque to the store; the consuming framework interprets
/// them for authorization decisions. Two claims are identical when both
/// the type and the value match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claim {
    /// Claim type (e.g., "role", "dept").
    pub claim_type: String,
    /// Claim value.
    pub value: String,
}

impl Claim {
    /// Creates a new claim.
    #[must_use]
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}
