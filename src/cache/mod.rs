//! Cache Module
//!
//! In-memory key-value storage with lazy TTL expiration. The store never
//! checks expiration on reads; the background sweeper in [`crate::tasks`]
//! removes stale entries.

mod entry;
mod options;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::Entry;
pub use options::{with_ttl, PutOption};
pub use store::Store;
