//! # acct-model
//!
//! Domain model for the account store.
//!
//! Accounts come in two kinds, [`User`] and [`Role`]. Both are plain
//! documents keyed by an [`AccountId`] and carrying a display name, its
//! caller-maintained normalized form, and a list of [`Claim`]s. The
//! [`Account`] trait is the generic view storage backends operate on.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod account;
pub mod claim;
pub mod id;
pub mod role;
pub mod user;

pub use account::{Account, normalize_name};
pub use claim::Claim;
pub use id::AccountId;
pub use role::Role;
pub use user::User;
