//! Utility helpers for the allocator hot path

use core::sync::atomic::{AtomicUsize, Ordering};

/// Backoff utility for spin loops
///
/// Doubles the spin count on every invocation up to a fixed ceiling, keeping
/// contended compare-exchange loops from hammering the cache line.
#[derive(Debug, Clone)]
pub struct Backoff {
    current: u32,
    max: u32,
}

impl Backoff {
    /// Create new backoff with default parameters
    #[inline]
    pub fn new() -> Self {
        Self { current: 1, max: 64 }
    }

    /// Create backoff with custom maximum spin count
    #[inline]
    pub fn with_max(max: u32) -> Self {
        Self { current: 1, max }
    }

    /// Perform backoff
    #[inline]
    pub fn spin(&mut self) {
        for _ in 0..self.current {
            core::hint::spin_loop();
        }
        if self.current < self.max {
            self.current *= 2;
        }
    }

    /// Reset backoff
    #[inline]
    pub fn reset(&mut self) {
        self.current = 1;
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new()
    }
}

/// Atomically update maximum value
#[inline]
pub fn atomic_max(current: &AtomicUsize, value: usize) {
    let mut max = current.load(Ordering::Relaxed);
    loop {
        if value <= max {
            break;
        }
        match current.compare_exchange_weak(max, value, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => break,
            Err(x) => max = x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_grows_to_max() {
        let mut backoff = Backoff::with_max(8);
        for _ in 0..10 {
            backoff.spin();
        }
        assert_eq!(backoff.current, 8);

        backoff.reset();
        assert_eq!(backoff.current, 1);
    }

    #[test]
    fn test_atomic_max() {
        let value = AtomicUsize::new(10);
        atomic_max(&value, 5);
        assert_eq!(value.load(Ordering::Relaxed), 10);
        atomic_max(&value, 20);
        assert_eq!(value.load(Ordering::Relaxed), 20);
    }
}
