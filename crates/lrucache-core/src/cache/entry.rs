//! Cached records and the handles that address them

use chrono::{DateTime, Utc};

/// Stable handle to an entry slot in the recency arena.
/// Remains valid until the entry is removed from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Slot(pub(crate) usize);

/// A single cached record with its recency linkage
#[derive(Debug)]
pub(crate) struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    /// Insertion time. Informational only, never used for ordering.
    pub(crate) created: DateTime<Utc>,
    /// Neighbour towards the head (more recently used)
    pub(crate) prev: Option<Slot>,
    /// Neighbour towards the tail (less recently used)
    pub(crate) next: Option<Slot>,
}

impl<V> Entry<V> {
    pub(crate) fn new(key: String, value: V) -> Self {
        Self {
            key,
            value,
            created: Utc::now(),
            prev: None,
            next: None,
        }
    }
}
