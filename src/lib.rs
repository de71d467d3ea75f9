//! # fixed-pool
//!
//! A fixed-capacity pool allocator with reset-only reclamation.
//!
//! The allocator owns a single contiguous byte arena and a cursor marking
//! the boundary between allocated and free space. Allocation carves ranges
//! off the front of the free region in O(1); the only way to reclaim space
//! is to reset the whole arena, either explicitly or by releasing the
//! first allocation made since the last reset.
//!
//! ## Quick Start
//!
//! ```rust
//! use fixed_pool::{DEFAULT_CAPACITY, PoolAllocator};
//!
//! let pool = PoolAllocator::new(DEFAULT_CAPACITY)?;
//!
//! let first = pool.allocate(100)?;
//! let second = pool.allocate(200)?;
//! assert_eq!(second.offset(), 100);
//!
//! // Releasing anything but the first allocation is a no-op.
//! pool.release(second);
//! assert_eq!(pool.used(), 300);
//!
//! // Releasing the first allocation reclaims the entire arena.
//! pool.release(first);
//! assert!(pool.is_empty());
//! # Ok::<(), fixed_pool::PoolError>(())
//! ```
//!
//! ## Design
//!
//! - No free list, no fragmentation management, no per-allocation metadata:
//!   the single cursor is the entire allocation state.
//! - Handles are `(offset, length, epoch)` triples, not raw pointers. Every
//!   reset advances the pool's epoch, so handles issued before a reset are
//!   detectably stale rather than silently aliasing new allocations.
//! - Cursor bookkeeping uses atomics with compare-exchange, so concurrent
//!   `allocate`/`release` calls cannot corrupt the cursor. Payload access
//!   through [`PoolAllocator::data_ptr`] remains the caller's
//!   responsibility.
//!
//! ## Features
//!
//! - `logging`: emit `tracing` events for allocation failures and resets

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

// Error types
pub mod error;

// Core modules
pub mod core;
pub mod pool;
pub mod utils;

// Re-export common types for convenience
pub use crate::core::traits::{BasicMemoryUsage, MemoryUsage, Resettable};
pub use crate::error::{PoolError, PoolResult};
pub use crate::pool::{
    DEFAULT_CAPACITY, PoolAllocator, PoolConfig, PoolHandle, PoolScope, PoolStats,
};

/// Convenient re-exports of commonly used types and traits.
pub mod prelude {
    pub use crate::core::traits::{BasicMemoryUsage, MemoryUsage, Resettable};
    pub use crate::error::{PoolError, PoolResult};
    pub use crate::pool::{
        DEFAULT_CAPACITY, PoolAllocator, PoolConfig, PoolHandle, PoolScope, PoolStats,
    };
}
