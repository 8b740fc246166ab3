//! Cumulative operation and resize counters.
//!
//! [`ArrayMetrics`] is updated in place by every successful operation and
//! every attempted resize, so callers can profile resize frequency without
//! instrumenting the array themselves.

/// Counters collected over the lifetime of a dynamic array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayMetrics {
    /// Number of successful `append` calls.
    pub appends: u64,
    /// Number of successful `pop` calls.
    pub pops: u64,
    /// Number of resizes that increased capacity.
    pub grow_resizes: u64,
    /// Number of resizes that decreased capacity.
    pub shrink_resizes: u64,
    /// Total elements copied across all resizes.
    pub elements_copied: u64,
    /// Largest capacity ever allocated.
    pub peak_capacity: usize,
    /// Number of resizes abandoned because allocation failed.
    pub failed_allocations: u64,
}

impl ArrayMetrics {
    /// Total resizes of either direction.
    pub fn resizes(&self) -> u64 {
        self.grow_resizes + self.shrink_resizes
    }
}
