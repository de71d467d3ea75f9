//! Standalone error types for fixed-pool
//!
//! Uses thiserror for clean, idiomatic Rust error definitions.

use thiserror::Error;

#[cfg(feature = "logging")]
use tracing::warn;

/// Errors reported by the pool allocator
///
/// The allocation path has exactly two failure modes: a zero-length request
/// and pool exhaustion. `InvalidConfig` is only produced at construction
/// time. `release` never fails and has no error representation.
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone)]
pub enum PoolError {
    /// The requested allocation size is not serviceable (zero bytes)
    #[error("invalid allocation request: {reason}")]
    InvalidRequest {
        /// Why the request was rejected
        reason: String,
    },

    /// The pool has insufficient remaining contiguous space
    #[error("pool exhausted: requested {requested} bytes, available {available}")]
    OutOfMemory {
        /// Bytes the caller asked for
        requested: usize,
        /// Bytes left between the cursor and the end of the arena
        available: usize,
    },

    /// Construction-time parameter validation failed
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected
        reason: String,
    },
}

impl PoolError {
    /// Check if error is retryable
    ///
    /// Exhaustion clears after a reset, so callers holding the first handle
    /// can retry. Invalid requests and configurations never succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }

    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "POOL:ALLOC:INVALID",
            Self::OutOfMemory { .. } => "POOL:ALLOC:EXHAUSTED",
            Self::InvalidConfig { .. } => "POOL:CONFIG:INVALID",
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(reason: &str) -> Self {
        Self::InvalidRequest {
            reason: reason.to_string(),
        }
    }

    /// Create a pool exhausted error
    pub fn out_of_memory(requested: usize, available: usize) -> Self {
        #[cfg(feature = "logging")]
        warn!(requested, available, "pool exhausted");

        Self::OutOfMemory {
            requested,
            available,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(reason: &str) -> Self {
        Self::InvalidConfig {
            reason: reason.to_string(),
        }
    }
}

/// Result type for pool operations
pub type PoolResult<T> = core::result::Result<T, PoolError>;
