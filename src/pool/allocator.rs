//! Main pool allocator implementation
//!
//! # Safety
//!
//! This module implements a fixed-capacity pool allocator with a single
//! high-water cursor:
//! - Arena buffer wrapped in `SyncUnsafeCell` for interior mutability
//! - Atomic cursor offset for allocation via CAS
//! - Reclamation is reset-to-empty only; there is no free list and no
//!   per-allocation bookkeeping
//! - Epoch counter invalidates handles issued before a reset
//!
//! ## Invariants
//!
//! - `0 <= cursor <= capacity` at all times
//! - Bytes in `[0, cursor)` are allocated, `[cursor, capacity)` are free
//! - Within an epoch, issued ranges never overlap and are monotonically
//!   increasing (enforced by the CAS on the cursor)
//! - Failed allocations leave the cursor unchanged
//! - `release` is total: it either reclaims the entire arena (first handle of
//!   the current epoch) or does nothing
//!
//! ## Memory Ordering
//!
//! - Acquire: loading cursor/epoch (see writes published by prior operations)
//! - Release: publishing cursor/epoch updates
//! - `AcqRel`: CAS success on the cursor
//! - Relaxed: statistics counters (ordering not critical)

use core::ptr::NonNull;
use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

#[cfg(feature = "logging")]
use tracing::debug;

use super::{PoolConfig, PoolHandle, PoolStats};
use crate::core::sync_cell::SyncUnsafeCell;
use crate::core::traits::{MemoryUsage, Resettable};
use crate::error::{PoolError, PoolResult};
use crate::utils::{Backoff, atomic_max};

/// Capacity of the reference fixed pool, in bytes
///
/// The capacity is a construction parameter; this constant only documents
/// the historical default.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Pool allocator over a fixed-capacity byte arena
///
/// The allocator owns a contiguous buffer and a cursor marking the boundary
/// between allocated and free space. `allocate` carves ranges off the front
/// of the free region; `release` reclaims the *entire* arena, and only when
/// called with the handle of the first allocation made since the last reset.
/// Every other release is a silent no-op: the design tracks a single
/// cursor, so it can never prove that an interior range is safe to reclaim.
///
/// # Memory Layout
/// ```text
/// [0]----[alloc1]----[alloc2]----[cursor]----[free]----[capacity]
///  <-------- allocated ---------->          <-- available -->
/// ```
///
/// # Examples
/// ```rust
/// use fixed_pool::PoolAllocator;
///
/// let pool = PoolAllocator::new(1024)?;
/// let first = pool.allocate(100)?;
/// let second = pool.allocate(200)?;
/// assert_eq!(first.offset(), 0);
/// assert_eq!(second.offset(), 100);
///
/// // Releasing the first allocation reclaims the whole arena.
/// pool.release(first);
/// assert_eq!(pool.used(), 0);
/// # Ok::<(), fixed_pool::PoolError>(())
/// ```
pub struct PoolAllocator {
    /// Owned arena buffer with interior mutability
    arena: Box<SyncUnsafeCell<[u8]>>,

    /// Offset of the first free byte, in `[0, capacity]`
    cursor: AtomicUsize,

    /// Bumped on every reset; handles from older epochs are inert
    epoch: AtomicU32,

    /// Total capacity for convenience
    capacity: usize,

    /// Configuration
    config: PoolConfig,

    /// Statistics (only advanced when `config.track_stats` is set)
    total_allocs: AtomicUsize,
    failed_allocs: AtomicUsize,
    total_resets: AtomicUsize,
    peak_usage: AtomicUsize,
}

impl PoolAllocator {
    /// Creates a new pool allocator with custom configuration
    ///
    /// # Errors
    /// Returns `PoolError::InvalidConfig` if `capacity` is zero.
    pub fn with_config(capacity: usize, config: PoolConfig) -> PoolResult<Self> {
        if capacity == 0 {
            return Err(PoolError::invalid_config("capacity cannot be zero"));
        }

        let mut vec = vec![0u8; capacity];

        // Fill with alloc pattern if debugging
        if let Some(pattern) = config.alloc_pattern {
            vec.fill(pattern);
        }

        let arena = SyncUnsafeCell::from_boxed_slice(vec.into_boxed_slice());

        Ok(Self {
            arena,
            cursor: AtomicUsize::new(0),
            epoch: AtomicU32::new(0),
            capacity,
            config,
            total_allocs: AtomicUsize::new(0),
            failed_allocs: AtomicUsize::new(0),
            total_resets: AtomicUsize::new(0),
            peak_usage: AtomicUsize::new(0),
        })
    }

    /// Creates a new pool allocator with default configuration
    pub fn new(capacity: usize) -> PoolResult<Self> {
        Self::with_config(capacity, PoolConfig::default())
    }

    /// Returns the total capacity of the arena
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the amount of memory currently allocated
    #[inline]
    pub fn used(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    /// Returns the amount of memory available for allocation
    #[inline]
    pub fn available(&self) -> usize {
        self.capacity.saturating_sub(self.used())
    }

    /// Returns true if nothing is currently allocated
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.used() == 0
    }

    /// Returns the current epoch
    ///
    /// The epoch advances on every reset. Handles carry the epoch they were
    /// issued under; a mismatch marks them stale.
    #[inline]
    pub fn epoch(&self) -> u32 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Allocates `size` bytes from the front of the free region
    ///
    /// On success the returned handle covers `[cursor, cursor + size)` and
    /// the cursor advances by exactly `size`. Successive successful
    /// allocations never overlap until the next reset.
    ///
    /// # Errors
    /// - `PoolError::InvalidRequest` if `size` is zero
    /// - `PoolError::OutOfMemory` if fewer than `size` contiguous bytes
    ///   remain; the cursor is left unchanged
    pub fn allocate(&self, size: usize) -> PoolResult<PoolHandle> {
        if size == 0 {
            self.record_failure();
            return Err(PoolError::invalid_request("zero-length allocation"));
        }

        let Some(offset) = self.try_bump(size) else {
            self.record_failure();
            return Err(PoolError::out_of_memory(size, self.available()));
        };

        Ok(PoolHandle {
            offset,
            len: size,
            epoch: self.epoch.load(Ordering::Acquire),
            pool: self.id(),
        })
    }

    /// Releases an allocation, following the reset-only policy
    ///
    /// If `handle` refers to the first allocation made since the last reset
    /// (offset zero, current epoch), the *entire* arena is reclaimed, not
    /// just the bytes covered by the handle, and every other outstanding
    /// handle becomes stale. Any other handle, including stale and foreign
    /// ones, is silently ignored.
    ///
    /// This call never fails and never reports an error.
    pub fn release(&self, handle: PoolHandle) {
        if handle.pool != self.id()
            || handle.offset() != 0
            || handle.epoch() != self.epoch.load(Ordering::Acquire)
        {
            return;
        }
        self.reset_internal();
    }

    /// Resets the pool to empty, reclaiming the entire arena
    ///
    /// Equivalent to releasing the first allocation of the current epoch,
    /// under an honest name. All outstanding handles become stale.
    #[inline]
    pub fn reset(&self) {
        self.reset_internal();
    }

    /// Returns a pointer to the bytes covered by `handle`
    ///
    /// Validates that the handle belongs to the current epoch and lies
    /// entirely within the allocated prefix of the arena; stale, foreign and
    /// out-of-range handles yield `None`.
    ///
    /// Dereferencing the returned pointer is subject to the usual contract:
    /// it is invalidated by any reset of this pool, and the caller must not
    /// form overlapping mutable references through copies of the same
    /// handle.
    pub fn data_ptr(&self, handle: PoolHandle) -> Option<NonNull<[u8]>> {
        if handle.pool != self.id() || handle.epoch() != self.epoch.load(Ordering::Acquire) {
            return None;
        }

        let end = handle.offset().checked_add(handle.len())?;
        if end > self.cursor.load(Ordering::Acquire) {
            return None;
        }

        // SAFETY: Deriving a pointer into the allocated prefix.
        // - [offset, end) is within bounds: end <= cursor <= capacity (checked above)
        // - The range was issued by allocate under the current epoch, so no
        //   other live handle overlaps it
        // - Going through the UnsafeCell keeps provenance over the whole arena
        let ptr = unsafe {
            let arena = &mut *self.arena.get();
            arena.get_unchecked_mut(handle.offset()..end).as_mut_ptr()
        };

        NonNull::new(ptr).map(|p| NonNull::slice_from_raw_parts(p, handle.len()))
    }

    /// Returns a snapshot of the pool's statistics
    ///
    /// Counters only advance when the configuration enables
    /// `track_stats`; otherwise the snapshot stays at zero.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            allocation_count: self.total_allocs.load(Ordering::Relaxed),
            failed_allocations: self.failed_allocs.load(Ordering::Relaxed),
            reset_count: self.total_resets.load(Ordering::Relaxed),
            peak_usage: self.peak_usage.load(Ordering::Relaxed),
        }
    }

    /// Attempts to advance the cursor by `size` bytes
    ///
    /// Returns the start offset of the reserved range, or `None` when the
    /// remaining capacity is insufficient or the retry budget is exhausted.
    fn try_bump(&self, size: usize) -> Option<usize> {
        let mut backoff = self.config.use_backoff.then(Backoff::new);
        let mut attempts = 0;

        loop {
            if attempts >= self.config.max_retries {
                return None;
            }

            let current = self.cursor.load(Ordering::Acquire);
            let next = current.checked_add(size)?;

            if next > self.capacity {
                return None;
            }

            let result = if attempts == 0 {
                self.cursor
                    .compare_exchange(current, next, Ordering::AcqRel, Ordering::Acquire)
            } else {
                self.cursor
                    .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
            };

            if result.is_ok() {
                if self.config.track_stats {
                    self.total_allocs.fetch_add(1, Ordering::Relaxed);
                    atomic_max(&self.peak_usage, next);
                }

                // Fill with pattern if configured
                if let Some(pattern) = self.config.alloc_pattern {
                    // SAFETY: Filling freshly reserved bytes.
                    // - CAS success grants exclusive ownership of [current, next)
                    // - The range is within bounds: next <= capacity (checked above)
                    unsafe {
                        let arena = &mut *self.arena.get();
                        if let Some(slice) = arena.get_mut(current..next) {
                            slice.fill(pattern);
                        }
                    }
                }

                return Some(current);
            }

            attempts += 1;
            if let Some(b) = backoff.as_mut() {
                b.spin();
            }
        }
    }

    /// Reclaims the whole arena (internal helper)
    fn reset_internal(&self) {
        let prior = self.cursor.load(Ordering::Acquire);

        // Fill the reclaimed prefix with the dealloc pattern if debugging
        if let Some(pattern) = self.config.dealloc_pattern
            && prior > 0
        {
            // SAFETY: Filling memory being reclaimed.
            // - [0, prior) is the allocated prefix, within bounds
            // - After the reset below this memory is unallocated again
            unsafe {
                let arena = &mut *self.arena.get();
                if let Some(slice) = arena.get_mut(..prior) {
                    slice.fill(pattern);
                }
            }
        }

        self.cursor.store(0, Ordering::Release);
        self.epoch.fetch_add(1, Ordering::Release);

        if self.config.track_stats {
            self.total_resets.fetch_add(1, Ordering::Relaxed);
        }

        #[cfg(feature = "logging")]
        debug!(reclaimed = prior, "pool reset to empty");
    }

    /// Identity of this pool, derived from the arena's address
    ///
    /// Stable for the allocator's lifetime; used to recognize handles issued
    /// by a different pool.
    #[inline]
    fn id(&self) -> u64 {
        self.arena.get().cast::<u8>() as usize as u64
    }

    #[inline]
    fn record_failure(&self) {
        if self.config.track_stats {
            self.failed_allocs.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl MemoryUsage for PoolAllocator {
    fn used_memory(&self) -> usize {
        self.used()
    }

    fn available_memory(&self) -> Option<usize> {
        Some(self.available())
    }

    fn total_memory(&self) -> Option<usize> {
        Some(self.capacity())
    }
}

impl Resettable for PoolAllocator {
    fn reset(&self) {
        self.reset_internal();
    }
}

impl core::fmt::Debug for PoolAllocator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PoolAllocator")
            .field("capacity", &self.capacity)
            .field("cursor", &self.used())
            .field("epoch", &self.epoch())
            .finish_non_exhaustive()
    }
}
