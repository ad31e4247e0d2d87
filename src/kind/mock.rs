//! Test-only counting adapter, used to assert round-trip create/duplicate/
//! destroy counts against `Cache`'s index/recency/eviction mechanics
//! without touching real PEM data.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::kind::Handle;

/// A mock loaded value: just an id, so tests can assert which logical
/// material a cache hit returned.
#[derive(Debug, PartialEq, Eq)]
pub struct MockValue {
    pub id: u64,
}

/// Counts `create`/`duplicate`/`destroy` calls made through it.
///
/// Unlike the real kind adapters, `CountingKind` is driven directly by
/// tests rather than through [`crate::kind::create`] — it stands in for
/// "the adapter `Cache` would call" so a test can assert exactly how many
/// times each lifecycle operation ran.
#[derive(Default)]
pub struct CountingKind {
    pub creates: AtomicUsize,
    pub duplicates: AtomicUsize,
    pub destroys: AtomicUsize,
}

impl CountingKind {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, id: u64) -> Handle {
        self.creates.fetch_add(1, Ordering::SeqCst);
        Handle::Mock(Arc::new(MockValue { id }))
    }

    pub fn duplicate(&self, handle: &Handle) -> Handle {
        self.duplicates.fetch_add(1, Ordering::SeqCst);
        handle.clone()
    }

    pub fn destroy(&self, handle: Handle) {
        self.destroys.fetch_add(1, Ordering::SeqCst);
        handle.destroy();
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicates.load(Ordering::SeqCst)
    }

    pub fn destroy_count(&self) -> usize {
        self.destroys.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_operation_independently() {
        let kind = CountingKind::new();
        let h = kind.create(1);
        let h2 = kind.duplicate(&h);
        kind.destroy(h);
        kind.destroy(h2);

        assert_eq!(kind.create_count(), 1);
        assert_eq!(kind.duplicate_count(), 1);
        assert_eq!(kind.destroy_count(), 2);
    }
}
