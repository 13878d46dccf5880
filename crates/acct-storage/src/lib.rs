//! # acct-storage
//!
//! Storage abstraction traits for the account store.
//!
//! This crate defines the narrow capability interfaces a concrete
//! backend implements, composed rather than inherited so a backend can
//! support a subset:
//!
//! - [`AccountWriter`] - create / update / delete
//! - [`AccountReader`] - lookups by id and normalized name, enumeration
//! - [`ClaimStore`] - claim management
//! - [`UserCredentialStore`] - the broader credential-and-profile
//!   contract, unsupported by default
//!
//! [`UserStore`] and [`RoleStore`] combine the capabilities for the two
//! account kinds.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod account;
pub mod error;
pub mod role;
pub mod user;

pub use account::{AccountReader, AccountWriter, ClaimStore};
pub use error::{StorageError, StorageResult};
pub use role::RoleStore;
pub use user::{UserCredentialStore, UserStore};
