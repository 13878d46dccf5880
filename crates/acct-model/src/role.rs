//! Role domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::{Account, normalize_name};
use crate::claim::Claim;
use crate::id::AccountId;

/// A role account document.
///
/// Roles carry a name unique per deployment and a list of claims. Role
/// membership linkage to users is out of scope for the store; deleting
/// a role does not touch users referencing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier, immutable after creation.
    pub id: AccountId,
    /// Role name.
    pub name: String,
    /// Canonical (uppercased) name, maintained by the caller.
    pub normalized_name: String,
    /// Claims attached to this role.
    pub claims: Vec<Claim>,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Creates a new role with a freshly assigned id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let normalized_name = normalize_name(&name);
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name,
            normalized_name,
            claims: Vec::new(),
            created_at: now,
            updated_at: now,
        }
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

    /// Bumps the updated-at timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Account for Role {
    const KIND: &'static str = "Role";
    const ID_FIELD: &'static str = "id";
    const NAME_FIELD: &'static str = "name";
    const NORMALIZED_NAME_FIELD: &'static str = "normalized_name";
    const CLAIMS_FIELD: &'static str = "claims";

    fn id(&self) -> AccountId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    fn claims(&self) -> &[Claim] {
        &self.claims
    }

    fn claims_mut(&mut self) -> &mut Vec<Claim> {
        &mut self.claims
    }
}
