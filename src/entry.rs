//! A single cached material plus its bookkeeping metadata.

use std::time::{Duration, Instant};

use crate::identity::{Identity, Kind};
use crate::kind::source::Freshness;
use crate::kind::Handle;
use crate::recency::NodeId;

/// One entry in the index.
///
/// Tracks two independent timestamps, matching the original's
/// `cn->created`/`cn->accessed`: `created` marks the last time the entry's
/// freshness was revalidated against its source file (gated by
/// `CacheConfig::valid`), while `accessed` marks the last time it was
/// looked up (gated by `CacheConfig::inactive`). Conflating the two would
/// make a frequently-hit-but-rarely-revalidated entry look fresh when it
/// is merely popular, or vice versa.
///
/// `recency_node` is `None` for config-time entries: the configuration
/// cache is unbounded and never evicts on inactivity, so it has no use for
/// recency tracking. Connection-time entries always carry a
/// `recency_node`.
pub struct Entry {
    pub identity: Identity,
    pub kind: Kind,
    pub handle: Handle,
    pub freshness: Option<Freshness>,
    pub created: Instant,
    pub accessed: Instant,
    pub generation: u64,
    pub recency_node: Option<NodeId>,
}

impl Entry {
    pub fn new(identity: Identity, kind: Kind, handle: Handle, freshness: Option<Freshness>, generation: u64) -> Self {
        let now = Instant::now();
        Entry {
            identity,
            kind,
            handle,
            freshness,
            created: now,
            accessed: now,
            generation,
            recency_node: None,
        }
    }

    pub fn touch_accessed(&mut self) {
        self.accessed = Instant::now();
    }

    pub fn mark_revalidated(&mut self) {
        self.created = Instant::now();
    }

    /// Whether `accessed` is stale enough that a lookup hit should be
    /// treated as a miss (lookup-time staleness).
    pub fn is_inactive(&self, inactive: Duration) -> bool {
        self.accessed.elapsed() > inactive
    }

    /// Whether the revalidation window has elapsed since `created`, i.e.
    /// whether this hit should re-stat the source file before being
    /// served.
    pub fn needs_revalidation(&self, valid: Duration) -> bool {
        self.created.elapsed() > valid
    }
}
