//! Cache module
//!
//! `LruCache` composes a key index and a recency list that share entries
//! through slot handles into a single arena.

mod entry;
mod index;
mod lru;
mod recency;

pub use lru::{Cache, LruCache};
