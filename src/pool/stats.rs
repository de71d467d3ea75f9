//! Pool allocator statistics

/// Point-in-time snapshot of pool activity
///
/// Counters are cumulative over the lifetime of the allocator; they are not
/// cleared by a reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Number of successful allocations
    pub allocation_count: usize,
    /// Number of rejected allocations (invalid requests and exhaustion)
    pub failed_allocations: usize,
    /// Number of times the arena was reclaimed (qualifying release or reset)
    pub reset_count: usize,
    /// Highest cursor value ever observed, in bytes
    pub peak_usage: usize,
}

impl PoolStats {
    /// Calculate current allocation efficiency (0.0 to 1.0)
    ///
    /// Higher values indicate fewer failed allocations.
    pub fn allocation_efficiency(&self) -> f64 {
        let total_attempts = self.allocation_count + self.failed_allocations;
        if total_attempts > 0 {
            self.allocation_count as f64 / total_attempts as f64
        } else {
            1.0
        }
    }
}

impl core::fmt::Display for PoolStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Pool Statistics:")?;
        writeln!(f, "  Allocations: {}", self.allocation_count)?;
        writeln!(f, "  Failed allocations: {}", self.failed_allocations)?;
        writeln!(f, "  Resets: {}", self.reset_count)?;
        writeln!(f, "  Peak usage: {} bytes", self.peak_usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_efficiency() {
        let stats = PoolStats::default();
        assert_eq!(stats.allocation_efficiency(), 1.0);

        let stats = PoolStats {
            allocation_count: 3,
            failed_allocations: 1,
            ..PoolStats::default()
        };
        assert_eq!(stats.allocation_efficiency(), 0.75);
    }
}
