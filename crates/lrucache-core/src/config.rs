//! Cache configuration types
//!
//! The binary loads these from its TOML file; library users may build
//! them directly or deserialize them from their own configuration.

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Configuration for an LRU cache
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries held at once.
    /// Signed so that invalid values from configuration can be reported.
    #[serde(default = "default_capacity")]
    pub capacity: i64,
}

impl CacheConfig {
    /// Validate the configured capacity and convert it to an entry count
    pub fn validated_capacity(&self) -> Result<usize, CacheError> {
        if self.capacity <= 0 {
            return Err(CacheError::InvalidCapacity(self.capacity));
        }
        usize::try_from(self.capacity).map_err(|_| CacheError::CapacityTooLarge(self.capacity))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> i64 {
    1024
}
