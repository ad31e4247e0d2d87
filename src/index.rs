//! The ordered index: entries are ordered by the ternary comparator
//! `(hash, kind, identity bytes)`, replacing the original's rbtree node
//! comparison (hash, then kind-table address, then `ngx_memn2cmp` over the
//! identity).

use std::collections::BTreeMap;

use crate::entry::Entry;
use crate::identity::{murmur2, Identity, Kind};

/// The index's sort/lookup key. Field order is significant: derived `Ord`
/// compares `hash` first, then `kind`, then `identity_bytes`, matching the
/// original's three-way comparator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexKey {
    pub hash: u32,
    pub kind: Kind,
    pub identity_bytes: Vec<u8>,
}

impl IndexKey {
    pub fn new(kind: Kind, identity: &Identity) -> Self {
        IndexKey {
            hash: murmur2(&identity.bytes),
            kind,
            identity_bytes: identity.bytes.clone(),
        }
    }
}

/// The cache's primary lookup structure: an ordered map from `IndexKey` to
/// [`Entry`]. `BTreeMap` gives the ordered-index semantics for free rather
/// than requiring a hand-rolled red-black tree; insertion, lookup, and
/// removal all go through the comparator above.
#[derive(Default)]
pub struct Index {
    entries: BTreeMap<IndexKey, Entry>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &IndexKey) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &IndexKey) -> Option<&mut Entry> {
        self.entries.get_mut(key)
    }

    pub fn insert(&mut self, key: IndexKey, entry: Entry) -> Option<Entry> {
        self.entries.insert(key, entry)
    }

    pub fn remove(&mut self, key: &IndexKey) -> Option<Entry> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IndexKey, &Entry)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &IndexKey> {
        self.entries.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn key(kind: Kind, raw: &str) -> IndexKey {
        let id = Identity::normalize(kind, raw, Path::new("/x")).unwrap();
        IndexKey::new(kind, &id)
    }

    #[test]
    fn ordering_is_hash_then_kind_then_identity() {
        let a = key(Kind::Cert, "/a.pem");
        let b = key(Kind::Ca, "/a.pem");
        // same identity bytes, different kind: kind breaks the tie when
        // hashes happen to collide (murmur2 hashes only the identity
        // bytes, which are identical here), so Cert < Ca must hold.
        if a.hash == b.hash {
            assert!(a < b);
        }
    }

    #[test]
    fn distinct_paths_are_distinct_keys() {
        let a = key(Kind::Cert, "/a.pem");
        let b = key(Kind::Cert, "/b.pem");
        assert_ne!(a, b);
    }
}
