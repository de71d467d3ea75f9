//! Core traits for memory management
//!
//! This module defines the fundamental traits used throughout fixed-pool.

/// Memory usage tracking trait
///
/// Implemented by allocators that track usage against a known capacity.
/// Provides both basic capacity information and convenience methods for
/// monitoring.
pub trait MemoryUsage {
    /// Get currently used memory in bytes
    fn used_memory(&self) -> usize;

    /// Get available memory in bytes (if known)
    fn available_memory(&self) -> Option<usize>;

    /// Get total memory capacity in bytes (if known)
    fn total_memory(&self) -> Option<usize> {
        match (self.used_memory(), self.available_memory()) {
            (used, Some(available)) => Some(used + available),
            _ => None,
        }
    }

    /// Returns memory usage as a percentage (0.0 to 100.0)
    ///
    /// Returns `None` if total memory is unknown or zero.
    fn memory_usage_percent(&self) -> Option<f32> {
        self.total_memory().map(|total| {
            if total == 0 {
                0.0
            } else {
                (self.used_memory() as f32 / total as f32) * 100.0
            }
        })
    }

    /// Returns detailed memory usage information
    fn memory_usage(&self) -> BasicMemoryUsage {
        BasicMemoryUsage {
            used: self.used_memory(),
            available: self.available_memory(),
            total: self.total_memory(),
            usage_percent: self.memory_usage_percent(),
        }
    }
}

/// Basic memory usage information
///
/// Simplified view focusing on capacity management.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicMemoryUsage {
    /// Currently used memory in bytes
    pub used: usize,
    /// Available memory in bytes (None if unlimited)
    pub available: Option<usize>,
    /// Total memory capacity in bytes (None if unlimited)
    pub total: Option<usize>,
    /// Memory usage as percentage (None if cannot be calculated)
    pub usage_percent: Option<f32>,
}

impl core::fmt::Display for BasicMemoryUsage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "used: {} bytes", self.used)?;

        if let Some(total) = self.total {
            write!(f, ", total: {total} bytes")?;
        }

        if let Some(percent) = self.usage_percent {
            write!(f, " ({percent:.1}%)")?;
        }

        Ok(())
    }
}

/// Resettable memory manager
///
/// Trait for allocators that support resetting to initial state. Resetting
/// invalidates all previously issued handles; the pool detects stale handles
/// through its epoch counter, so a reset cannot by itself cause undefined
/// behavior. Pointers previously obtained through payload accessors must not
/// be dereferenced after a reset.
pub trait Resettable {
    /// Reset allocator to initial state
    fn reset(&self);

    /// Check if this allocator can be reset
    fn can_reset(&self) -> bool {
        true
    }

    /// Resets the allocator only if it's safe to do so
    ///
    /// Returns `true` if reset was performed, `false` if skipped.
    fn try_reset(&self) -> bool {
        if self.can_reset() {
            self.reset();
            true
        } else {
            false
        }
    }
}

/// Blanket implementation of MemoryUsage for references
impl<T: MemoryUsage + ?Sized> MemoryUsage for &T {
    fn used_memory(&self) -> usize {
        (**self).used_memory()
    }

    fn available_memory(&self) -> Option<usize> {
        (**self).available_memory()
    }

    fn total_memory(&self) -> Option<usize> {
        (**self).total_memory()
    }
}

/// Blanket implementation of Resettable for references
impl<T: Resettable + ?Sized> Resettable for &T {
    fn reset(&self) {
        (**self).reset();
    }

    fn can_reset(&self) -> bool {
        (**self).can_reset()
    }
}
