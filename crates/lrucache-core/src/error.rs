//! Core error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Invalid capacity: {0} (must be greater than zero)")]
    InvalidCapacity(i64),

    #[error("Capacity too large for this platform: {0}")]
    CapacityTooLarge(i64),
}
