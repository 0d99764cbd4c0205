//! Persistence binding between typed lists and the key-value store.
//!
//! # Responsibility
//! - Own the load/replace contract shared by every list feature.
//! - Keep serialization details out of the services.
//!
//! # Invariants
//! - Lists are persisted wholesale as one JSON array per key.

pub mod list_repo;
