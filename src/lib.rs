//! memobucket - An in-process byte cache with TTL expiration
//!
//! A short-lived, non-persistent memoization layer: byte payloads are
//! written under string keys and stay readable until explicitly deleted or
//! until their time-to-live elapses. A background sweeper removes expired
//! entries; reads themselves never check the clock.

pub mod bucket;
pub mod cache;
pub mod config;
pub mod tasks;

pub use bucket::Bucket;
pub use cache::{with_ttl, PutOption};
pub use config::BucketConfig;
pub use tasks::spawn_sweeper;
