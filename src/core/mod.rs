//! Core building blocks shared across the crate
//!
//! - `traits` - Memory usage introspection and reset traits
//! - `sync_cell` - Interior mutability wrapper for the arena buffer

pub(crate) mod sync_cell;
pub mod traits;

pub use traits::{BasicMemoryUsage, MemoryUsage, Resettable};
