//! Fixed-capacity pool allocator
//!
//! ## Modules
//! - `allocator` - Main `PoolAllocator` implementation with the reset-only
//!   release policy
//! - `config` - Configuration variants (default, production, debug)
//! - `handle` - Opaque allocation handles with epoch validation
//! - `scope` - RAII helper for automatic arena reclamation
//! - `stats` - Allocation statistics snapshots

pub mod allocator;
pub mod config;
pub mod handle;
pub mod scope;
pub mod stats;

pub use allocator::{DEFAULT_CAPACITY, PoolAllocator};
pub use config::PoolConfig;
pub use handle::PoolHandle;
pub use scope::PoolScope;
pub use stats::PoolStats;
