//! LRU Cache Core
//!
//! This crate provides a capacity-bounded, thread-safe key-value cache
//! that evicts the least recently used entry when full.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, LruCache};
pub use config::CacheConfig;
pub use error::CacheError;
