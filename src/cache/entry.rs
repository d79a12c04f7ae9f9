//! Cache Entry Module
//!
//! Defines the record stored under each key: payload bytes, creation time,
//! and an optional per-entry TTL override.

use std::time::{Duration, Instant};

use bytes::Bytes;

// == Cache Entry ==
/// A single stored record. Immutable once written; a `put` to the same key
/// replaces the whole entry, including its creation timestamp.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The stored payload
    pub value: Bytes,
    /// Write timestamp; origin of the expiration clock
    pub created_at: Instant,
    /// Per-entry TTL. A non-zero value supersedes the bucket default;
    /// `None` or zero falls back to it.
    pub ttl_override: Option<Duration>,
}

impl Entry {
    // == Constructor ==
    /// Creates a new entry with `created_at` captured now and no TTL override.
    pub fn new(value: Bytes) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            ttl_override: None,
        }
    }

    // == Effective TTL ==
    /// Resolves the TTL that actually governs this entry.
    ///
    /// Returns the entry's own override when it is set and non-zero,
    /// otherwise the bucket-wide default. `None` (or a zero duration from
    /// either source) means the entry never expires.
    ///
    /// # Arguments
    /// * `default_ttl` - The bucket-wide default TTL
    pub fn effective_ttl(&self, default_ttl: Option<Duration>) -> Option<Duration> {
        match self.ttl_override {
            Some(ttl) if !ttl.is_zero() => Some(ttl),
            _ => default_ttl.filter(|ttl| !ttl.is_zero()),
        }
    }

    // == Is Expired ==
    /// Checks whether this entry has outlived its effective TTL at `now`.
    ///
    /// Boundary condition: an entry expires only once strictly more than the
    /// effective TTL has elapsed since `created_at`. Entries whose effective
    /// TTL is absent or zero never match.
    ///
    /// # Arguments
    /// * `now` - The scan timestamp (captured once per sweep, not per entry)
    /// * `default_ttl` - The bucket-wide default TTL
    pub fn is_expired(&self, now: Instant, default_ttl: Option<Duration>) -> bool {
        match self.effective_ttl(default_ttl) {
            Some(ttl) => now.duration_since(self.created_at) > ttl,
            None => false,
        }
    }
}
