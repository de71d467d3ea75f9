//! Allocation handle for pool ranges

/// Handle to a contiguous range of bytes inside a pool's arena
///
/// A handle is an opaque `(offset, length, epoch)` triple rather than a raw
/// pointer: after a reset the pool's epoch advances, so handles issued
/// before the reset are detectably stale instead of silently aliasing new
/// allocations. Handles also record which pool issued them, so a handle
/// presented to a different pool is recognized as foreign and ignored.
///
/// Handles are plain data. Copying one does not duplicate the allocation,
/// and dropping one reclaims nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolHandle {
    pub(super) offset: usize,
    pub(super) len: usize,
    pub(super) epoch: u32,
    pub(super) pool: u64,
}

impl PoolHandle {
    /// Offset of the first byte of this allocation within the arena
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the allocation in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the allocation covers zero bytes
    ///
    /// Always `false` for handles issued by a pool: zero-length requests are
    /// rejected at allocation time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last byte of this allocation
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Epoch of the pool at the time this handle was issued
    #[inline]
    pub fn epoch(&self) -> u32 {
        self.epoch
    }
}
