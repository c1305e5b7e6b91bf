//! LRU cache implementation

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::{debug, info, trace};

use super::entry::Entry;
use super::index::Index;
use super::recency::RecencyList;
use crate::config::CacheConfig;
use crate::error::CacheError;

/// Upper bound on slots reserved at construction; larger caches grow on demand
const MAX_PREALLOCATED: usize = 1024;

/// Operations shared by in-process caches.
///
/// A miss is not an error: `get` returns `None`.
pub trait Cache<V>: Send + Sync {
    /// Look up a value, marking it as most recently used on a hit
    fn get(&self, key: &str) -> Option<V>;

    /// Insert or replace a value, evicting the least recently used
    /// entry if a new key would exceed capacity
    fn set(&self, key: &str, value: V);

    /// Remove a key. Absent keys are ignored.
    fn del(&self, key: &str);

    /// Current number of entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry. Capacity is unchanged.
    fn flush(&self);
}

/// Index and recency list, always mutated together under one lock
struct Inner<V> {
    index: Index,
    recency: RecencyList<V>,
}

impl<V> Inner<V> {
    fn with_capacity(capacity: usize) -> Self {
        let reserved = capacity.min(MAX_PREALLOCATED);
        Self {
            index: Index::with_capacity(reserved),
            recency: RecencyList::with_capacity(reserved),
        }
    }

    fn get(&mut self, key: &str) -> Option<&V> {
        let slot = self.index.lookup(key)?;
        self.recency.move_to_front(slot);
        Some(&self.recency.get(slot).value)
    }

    fn set(&mut self, key: &str, value: V, capacity: usize) {
        if let Some(slot) = self.index.lookup(key) {
            self.recency.get_mut(slot).value = value;
            self.recency.move_to_front(slot);
            return;
        }

        if self.index.len() >= capacity {
            self.evict();
        }

        let slot = self.recency.push_front(Entry::new(key.to_string(), value));
        self.index.insert(key.to_string(), slot);
        self.check_consistency();
    }

    fn evict(&mut self) {
        let Some(evicted) = self.recency.pop_tail() else {
            panic!(
                "recency list is empty while index holds {} entries",
                self.index.len()
            );
        };
        if self.index.remove(&evicted.key).is_none() {
            panic!("evicted key {:?} missing from index", evicted.key);
        }
        debug!("Evicted least recently used entry: {}", evicted.key);
    }

    fn del(&mut self, key: &str) -> bool {
        match self.index.remove(key) {
            Some(slot) => {
                self.recency.remove(slot);
                self.check_consistency();
                true
            }
            None => false,
        }
    }

    fn flush(&mut self) -> usize {
        let count = self.index.len();
        self.index.clear();
        self.recency.clear();
        count
    }

    fn check_consistency(&self) {
        debug_assert_eq!(
            self.index.len(),
            self.recency.len(),
            "index and recency list diverged"
        );
    }
}

/// Thread-safe, capacity-bounded LRU cache.
///
/// Every operation takes a single exclusive lock covering both the key
/// index and the recency list, so callers never observe one updated
/// without the other.
pub struct LruCache<V> {
    capacity: usize,
    inner: Mutex<Inner<V>>,
}

impl<V> LruCache<V> {
    /// Create a new cache holding at most `capacity` entries
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(0));
        }

        info!("Initializing LRU cache (capacity: {} entries)", capacity);

        Ok(Self {
            capacity,
            inner: Mutex::new(Inner::with_capacity(capacity)),
        })
    }

    /// Create a new cache from configuration
    pub fn from_config(config: &CacheConfig) -> Result<Self, CacheError> {
        Self::new(config.validated_capacity()?)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check for a key without promoting it
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().index.lookup(key).is_some()
    }

    /// When the entry for `key` was first inserted. Does not promote it.
    pub fn inserted_at(&self, key: &str) -> Option<DateTime<Utc>> {
        let inner = self.inner.lock();
        let slot = inner.index.lookup(key)?;
        Some(inner.recency.get(slot).created)
    }

    /// Keys ordered from most to least recently used
    pub fn keys(&self) -> Vec<String> {
        let inner = self.inner.lock();
        inner.recency.iter().map(|e| e.key.clone()).collect()
    }

    /// Key that would be evicted next, if any
    pub fn peek_lru(&self) -> Option<String> {
        let inner = self.inner.lock();
        let slot = inner.recency.peek_tail()?;
        Some(inner.recency.get(slot).key.clone())
    }
}

impl<V: Clone + Send> Cache<V> for LruCache<V> {
    fn get(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.lock();
        match inner.get(key) {
            Some(value) => {
                trace!("Cache hit: {}", key);
                Some(value.clone())
            }
            None => {
                trace!("Cache miss: {}", key);
                None
            }
        }
    }

    fn set(&self, key: &str, value: V) {
        self.inner.lock().set(key, value, self.capacity);
    }

    fn del(&self, key: &str) {
        if self.inner.lock().del(key) {
            debug!("Deleted cache entry: {}", key);
        }
    }

    fn len(&self) -> usize {
        self.inner.lock().index.len()
    }

    fn flush(&self) {
        let count = self.inner.lock().flush();
        info!("Flushed {} cache entries", count);
    }
}
