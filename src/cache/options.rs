//! Put Options Module
//!
//! Per-call modifiers for `put`. Each option is a mutator applied to the
//! entry being constructed, before it is inserted. Options apply in call
//! order, so when two options touch the same field the last one wins.

use std::time::Duration;

use crate::cache::Entry;

// == Put Option ==
/// A configuration mutator applied to a not-yet-inserted [`Entry`].
///
/// The mechanism is deliberately open-ended: new options can be added
/// without changing the `put` signature.
pub struct PutOption {
    apply: Box<dyn Fn(&mut Entry) + Send + Sync>,
}

impl PutOption {
    /// Wraps a mutator closure as an option.
    pub fn new(apply: impl Fn(&mut Entry) + Send + Sync + 'static) -> Self {
        Self {
            apply: Box::new(apply),
        }
    }

    /// Applies this option to an entry under construction.
    pub(crate) fn apply(&self, entry: &mut Entry) {
        (self.apply)(entry)
    }
}

impl std::fmt::Debug for PutOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PutOption").finish_non_exhaustive()
    }
}

// == With TTL ==
/// Overrides the bucket's default TTL for the single entry being written.
///
/// The override lasts until the key is next overwritten. A zero duration is
/// treated as "no override": the bucket default applies.
pub fn with_ttl(ttl: Duration) -> PutOption {
    PutOption::new(move |entry| entry.ttl_override = Some(ttl))
}
