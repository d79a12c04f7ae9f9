//! Configuration Module
//!
//! Tunables for a bucket. The embedding service owns any file or
//! environment loading; this crate only takes the resolved values.

use std::time::Duration;

/// Bucket configuration.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use memobucket::BucketConfig;
///
/// let config = BucketConfig::default()
///     .with_default_ttl(Duration::from_secs(300))
///     .with_sweep_interval(Duration::from_millis(500));
/// ```
#[derive(Debug, Clone)]
pub struct BucketConfig {
    /// Default TTL for entries without a per-key override.
    /// `None` (the default) means such entries never expire.
    pub default_ttl: Option<Duration>,
    /// Interval between sweeper ticks (default: 1 second)
    pub sweep_interval: Duration,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            default_ttl: None,
            sweep_interval: Duration::from_secs(1),
        }
    }
}

impl BucketConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default TTL applied to entries written without an override.
    /// A zero duration behaves like no default at all.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = Some(ttl);
        self
    }

    /// Sets the interval between sweeps. Staleness of expired-but-unswept
    /// entries is bounded by this interval.
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }
}
