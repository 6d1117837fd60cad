//! Backend-agnostic key-value caching with lazy expiration.
//!
//! The [`ports::CacheStore`] trait is the contract every storage backend
//! implements; [`cache::Cache`] is the single handle callers hold over
//! whichever backend was selected at construction.

pub mod cache;
pub mod domain;
pub mod ports;

pub use cache::Cache;
pub use ports::CacheStore;
pub use shared::{Error, Result};
