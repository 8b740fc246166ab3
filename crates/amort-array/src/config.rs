//! Dynamic array configuration parameters.

use crate::error::ArrayError;

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Controls the initial allocation, the resize policy, and the credit
/// charges used by the accounting method. Validated by
/// [`DynamicArray::with_config`](crate::DynamicArray::with_config); all
/// values are immutable once the array is built.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayConfig {
    /// Number of slots allocated when the array is created.
    ///
    /// Default: 10. Must be at least `min_capacity`.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity on a grow resize, and to the
    /// post-removal size on a shrink resize.
    ///
    /// Default: 2. Must be at least 2.
    pub growth_factor: usize,

    /// Load ratio `(size - 1) / capacity` below which `pop` shrinks.
    ///
    /// Default: 0.25. Must lie in `(0, 1 / growth_factor)`, otherwise a
    /// freshly shrunk array could sit below the threshold again.
    pub shrink_threshold: f64,

    /// Smallest capacity a shrink resize may produce.
    ///
    /// Default: 1. A capacity of zero would "grow" to zero on the next
    /// append, so zero is rejected.
    pub min_capacity: usize,

    /// Credits charged by every `append`: one for the write, the rest
    /// banked toward the next grow resize.
    ///
    /// Default: 3.
    pub append_charge: i64,

    /// Credits charged by every `pop`: one for the removal, the rest banked
    /// toward the next shrink resize.
    ///
    /// Default: 2. With a charge of 1 a grow followed by a full drain
    /// leaves the ledger negative.
    pub pop_charge: i64,
}

impl ArrayConfig {
    /// Default number of slots allocated at construction.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Default grow/shrink multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default shrink trigger ratio.
    pub const DEFAULT_SHRINK_THRESHOLD: f64 = 0.25;

    /// Default capacity floor for shrinks.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Default credits charged per append.
    pub const DEFAULT_APPEND_CHARGE: i64 = 3;

    /// Default credits charged per pop.
    pub const DEFAULT_POP_CHARGE: i64 = 2;

    /// Create a config with the given initial capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            shrink_threshold: Self::DEFAULT_SHRINK_THRESHOLD,
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            append_charge: Self::DEFAULT_APPEND_CHARGE,
            pop_charge: Self::DEFAULT_POP_CHARGE,
        }
    }

    /// Check structural invariants.
    ///
    /// Returns [`ArrayError::InvalidConfig`] describing the first violated
    /// invariant.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.min_capacity == 0 {
            return Err(invalid("min_capacity must be at least 1".into()));
        }
        if self.initial_capacity < self.min_capacity {
            return Err(invalid(format!(
                "initial_capacity ({}) is below min_capacity ({})",
                self.initial_capacity, self.min_capacity,
            )));
        }
        if self.growth_factor < 2 {
            return Err(invalid(format!(
                "growth_factor must be at least 2, got {}",
                self.growth_factor,
            )));
        }
        let ceiling = 1.0 / self.growth_factor as f64;
        if !self.shrink_threshold.is_finite()
            || self.shrink_threshold <= 0.0
            || self.shrink_threshold >= ceiling
        {
            return Err(invalid(format!(
                "shrink_threshold must be in (0, {ceiling}), got {}",
                self.shrink_threshold,
            )));
        }
        if self.append_charge < 0 || self.pop_charge < 0 {
            return Err(invalid(format!(
                "credit charges must be non-negative, got append {} pop {}",
                self.append_charge, self.pop_charge,
            )));
        }
        Ok(())
    }

    /// Whether removing one element from an array of `size` elements held in
    /// `capacity` slots crosses the shrink threshold.
    pub fn should_shrink(&self, size: usize, capacity: usize) -> bool {
        size > 0 && ((size - 1) as f64 / capacity as f64) < self.shrink_threshold
    }

    /// Target capacity for a grow resize, or `None` on overflow.
    pub fn grow_target(&self, capacity: usize) -> Option<usize> {
        capacity.checked_mul(self.growth_factor)
    }

    /// Target capacity for a shrink resize ahead of removing one element.
    ///
    /// Never below the current `size` (the copy happens before removal) or
    /// below `min_capacity`.
    pub fn shrink_target(&self, size: usize) -> usize {
        size.saturating_sub(1)
            .saturating_mul(self.growth_factor)
            .max(size)
            .max(self.min_capacity)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

fn invalid(reason: String) -> ArrayError {
    ArrayError::InvalidConfig { reason }
}
