//! Key index mapping cache keys to recency slots

use std::collections::HashMap;

use super::entry::Slot;

/// O(1) lookup from key to the slot holding its entry.
/// Never reordered; ordering lives in the recency list.
#[derive(Debug, Default)]
pub(crate) struct Index {
    map: HashMap<String, Slot>,
}

impl Index {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn lookup(&self, key: &str) -> Option<Slot> {
        self.map.get(key).copied()
    }

    /// Insert a mapping, returning the slot it replaced, if any
    pub(crate) fn insert(&mut self, key: String, slot: Slot) -> Option<Slot> {
        self.map.insert(key, slot)
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<Slot> {
        self.map.remove(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}
