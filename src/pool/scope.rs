//! RAII-based scope for automatic arena reclamation

use super::PoolAllocator;

/// RAII helper that resets the pool when it goes out of scope
///
/// Reset-to-empty is the only reclamation this allocator supports, so the
/// guard resets the whole arena rather than restoring to a saved position.
/// Handles issued inside the scope become stale when the scope ends.
pub struct PoolScope<'a> {
    pool: &'a PoolAllocator,
}

impl<'a> PoolScope<'a> {
    /// Creates a new scope that will reset the pool when dropped
    pub fn new(pool: &'a PoolAllocator) -> Self {
        Self { pool }
    }

    /// Gets the underlying pool
    pub fn pool(&self) -> &'a PoolAllocator {
        self.pool
    }

    /// Manually reset and consume this scope
    pub fn finish(self) {
        // Drop handles the reset
        drop(self);
    }
}

impl Drop for PoolScope<'_> {
    fn drop(&mut self) {
        self.pool.reset();
    }
}
