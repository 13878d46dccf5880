//! # acct-storage-doc
//!
//! Document-collection backend for the account store.
//!
//! The store is a translation layer: each operation builds a
//! [`Filter`] or [`Update`] descriptor and issues exactly one call
//! against an injected [`DocumentCollection`]. The real driver lives
//! behind that trait; [`MemoryCollection`] implements it in process for
//! tests and small deployments.
//!
//! Name uniqueness is guarded authoritatively by a unique index on the
//! normalized-name field (see [`DocAccountStore::ensure_indexes`]); the
//! pre-write duplicate query only exists to produce a better error
//! without waiting for the index to reject the write.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod collection;
pub mod memory;
pub mod options;
pub mod role;
pub mod store;
pub mod user;

pub use collection::{
    DocResult, DocumentCollection, DocumentError, Filter, FindOptions, Update, UpdateOp,
};
pub use memory::MemoryCollection;
pub use options::StoreOptions;
pub use role::DocRoleStore;
pub use store::DocAccountStore;
pub use user::DocUserStore;
