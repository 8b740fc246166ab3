//! The self-managed growable array.
//!
//! [`DynamicArray`] owns a fixed-capacity [`Buffer`] and replaces it with a
//! larger or smaller one when `append` fills it or `pop` drains it below the
//! shrink threshold. Each operation settles a [`CreditLedger`] so the
//! amortized bound can be checked after the fact.
//!
//! # Ordering within an operation
//!
//! A resize allocates its new buffer before any credit is charged or any
//! element is copied. If the allocation fails, the operation returns
//! [`ArrayError::AllocationFailure`] and `size`, `capacity`, the ledger and
//! the stored elements are exactly what they were before the call.

use std::fmt;

use crate::buffer::Buffer;
use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::ledger::CreditLedger;
use crate::metrics::ArrayMetrics;

/// A growable array of `i64` with credit-based cost accounting.
///
/// Invariants: `1 <= capacity`, `size <= capacity`, and the ledger balance
/// equals credits charged minus credits spent.
#[derive(Debug)]
pub struct DynamicArray {
    storage: Buffer,
    size: usize,
    config: ArrayConfig,
    ledger: CreditLedger,
    metrics: ArrayMetrics,
}

impl DynamicArray {
    /// Create an empty array with the default configuration.
    ///
    /// Allocates [`ArrayConfig::DEFAULT_INITIAL_CAPACITY`] slots.
    ///
    /// # Panics
    ///
    /// Panics only if the allocator cannot provide the default initial
    /// allocation; use [`with_config`](Self::with_config) to handle that.
    pub fn new() -> Self {
        Self::with_config(ArrayConfig::default())
            .expect("default config is valid and its initial allocation is small")
    }

    /// Create an empty array with the given configuration.
    ///
    /// Returns [`ArrayError::InvalidConfig`] if validation fails, or
    /// [`ArrayError::AllocationFailure`] if the initial buffer cannot be
    /// allocated.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let storage = Buffer::try_new(config.initial_capacity)?;
        let metrics = ArrayMetrics {
            peak_capacity: storage.capacity(),
            ..ArrayMetrics::default()
        };
        Ok(Self {
            storage,
            size: 0,
            config,
            ledger: CreditLedger::new(),
            metrics,
        })
    }

    /// Number of elements present.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Value at `index`.
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<i64, ArrayError> {
        if index >= self.size {
            return Err(ArrayError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(self.storage.read(index))
    }

    /// Append `value` to the end, doubling capacity first if full.
    ///
    /// Charges `append_charge` credits, spends one per element copied by a
    /// grow resize and one for the write.
    pub fn append(&mut self, value: i64) -> Result<(), ArrayError> {
        let grown = if self.size == self.capacity() {
            Some(self.allocate_grow()?)
        } else {
            None
        };

        self.ledger.charge(self.config.append_charge);
        if let Some(buffer) = grown {
            self.install(buffer);
        }

        self.storage.write(self.size, value);
        self.size += 1;
        self.ledger.spend(1);

        self.metrics.appends += 1;
        self.ledger.settle();
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// If removal would leave the load ratio below the shrink threshold, the
    /// buffer is shrunk first so the copy is paid from banked credits.
    /// Returns [`ArrayError::EmptyArray`] without touching any state when
    /// there is nothing to remove.
    pub fn pop(&mut self) -> Result<i64, ArrayError> {
        if self.size == 0 {
            return Err(ArrayError::EmptyArray);
        }

        let shrunk = if self.config.should_shrink(self.size, self.capacity()) {
            let target = self.config.shrink_target(self.size);
            if target < self.capacity() {
                Some(self.allocate(target)?)
            } else {
                None
            }
        } else {
            None
        };

        self.ledger.charge(self.config.pop_charge);
        if let Some(buffer) = shrunk {
            self.install(buffer);
        }

        self.size -= 1;
        let value = self.storage.read(self.size);
        self.ledger.spend(1);

        self.metrics.pops += 1;
        self.ledger.settle();
        Ok(value)
    }

    /// Append every value from `values` in order.
    ///
    /// Stops at the first failure; values appended before it remain.
    pub fn try_extend<I>(&mut self, values: I) -> Result<(), ArrayError>
    where
        I: IntoIterator<Item = i64>,
    {
        for value in values {
            self.append(value)?;
        }
        Ok(())
    }

    /// The present elements, in insertion order.
    pub fn as_slice(&self) -> &[i64] {
        self.storage.slice(self.size)
    }

    /// Iterate over the present elements.
    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.as_slice().iter()
    }

    /// Credit ledger for this array.
    pub fn ledger(&self) -> &CreditLedger {
        &self.ledger
    }

    /// Configuration the array was built with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Cumulative operation and resize counters.
    pub fn metrics(&self) -> &ArrayMetrics {
        &self.metrics
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.storage.memory_bytes()
    }

    fn allocate_grow(&mut self) -> Result<Buffer, ArrayError> {
        match self.config.grow_target(self.capacity()) {
            Some(target) => self.allocate(target),
            None => {
                self.metrics.failed_allocations += 1;
                Err(ArrayError::AllocationFailure {
                    requested: usize::MAX,
                })
            }
        }
    }

    fn allocate(&mut self, capacity: usize) -> Result<Buffer, ArrayError> {
        debug_assert!(capacity >= self.size, "resize would drop elements");
        Buffer::try_new(capacity).inspect_err(|_| self.metrics.failed_allocations += 1)
    }

    /// Copy every present element into `buffer` and make it the storage.
    ///
    /// Spends one credit per element copied. Cannot fail: the buffer is
    /// already allocated.
    fn install(&mut self, mut buffer: Buffer) {
        let old_capacity = self.capacity();
        let new_capacity = buffer.capacity();
        debug_assert!(new_capacity >= self.size);

        for index in 0..self.size {
            buffer.write(index, self.storage.read(index));
            self.ledger.spend(1);
        }
        self.storage = buffer;

        self.metrics.elements_copied += self.size as u64;
        if new_capacity > old_capacity {
            self.metrics.grow_resizes += 1;
        } else {
            self.metrics.shrink_resizes += 1;
        }
        self.metrics.peak_capacity = self.metrics.peak_capacity.max(new_capacity);
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DynamicArray: size={}, capacity={}, {:?}",
            self.size,
            self.capacity(),
            self.as_slice(),
        )
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: i64) -> DynamicArray {
        let mut arr = DynamicArray::new();
        arr.try_extend(0..n).unwrap();
        arr
    }

    #[test]
    fn new_array_is_empty_with_initial_capacity() {
        let arr = DynamicArray::new();
        assert_eq!(arr.len(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), ArrayConfig::DEFAULT_INITIAL_CAPACITY);
        assert_eq!(arr.ledger().balance(), 0);
    }

    #[test]
    fn append_then_get() {
        let mut arr = DynamicArray::new();
        arr.append(42).unwrap();
        arr.append(-7).unwrap();
        assert_eq!(arr.get(0), Ok(42));
        assert_eq!(arr.get(1), Ok(-7));
        assert_eq!(arr.len(), 2);
    }

    #[test]
    fn get_past_size_is_out_of_range() {
        let arr = filled(3);
        assert_eq!(
            arr.get(3),
            Err(ArrayError::IndexOutOfRange { index: 3, size: 3 })
        );
        // Allocated but logically unused slots are not readable.
        assert!(arr.get(9).is_err());
    }

    #[test]
    fn pop_on_empty_fails_without_side_effects() {
        let mut arr = DynamicArray::new();
        assert_eq!(arr.pop(), Err(ArrayError::EmptyArray));
        assert_eq!(arr.ledger(), &CreditLedger::new());
        assert_eq!(arr.metrics().pops, 0);
    }

    #[test]
    fn append_charges_three_and_spends_one() {
        let mut arr = DynamicArray::new();
        arr.append(1).unwrap();
        assert_eq!(arr.ledger().charged(), 3);
        assert_eq!(arr.ledger().spent(), 1);
        assert_eq!(arr.ledger().balance(), 2);
    }

    #[test]
    fn full_append_doubles_capacity_before_write() {
        let mut arr = filled(10);
        assert_eq!(arr.capacity(), 10);
        assert_eq!(arr.ledger().balance(), 20);

        arr.append(10).unwrap();
        assert_eq!(arr.capacity(), 20);
        // 20 banked + 3 charged - 10 copied - 1 written.
        assert_eq!(arr.ledger().balance(), 12);
        assert_eq!(arr.metrics().grow_resizes, 1);
        assert_eq!(arr.metrics().elements_copied, 10);
    }

    #[test]
    fn shrink_copies_before_removal() {
        let mut arr = DynamicArray::with_config(ArrayConfig::new(16)).unwrap();
        arr.try_extend([5, 6, 7, 8]).unwrap();
        let before = arr.ledger().balance();

        assert_eq!(arr.pop(), Ok(8));
        assert_eq!(arr.capacity(), 6);
        assert_eq!(arr.as_slice(), &[5, 6, 7]);
        // 2 charged, 4 copied (pre-removal size), 1 removed.
        assert_eq!(arr.ledger().balance(), before + 2 - 4 - 1);
        assert_eq!(arr.metrics().shrink_resizes, 1);
    }

    #[test]
    fn shrink_skipped_when_target_is_not_smaller() {
        let config = ArrayConfig::new(1);
        let mut arr = DynamicArray::with_config(config).unwrap();
        arr.append(9).unwrap();
        assert_eq!(arr.pop(), Ok(9));
        assert_eq!(arr.capacity(), 1);
        assert_eq!(arr.metrics().shrink_resizes, 0);
    }

    #[test]
    fn capacity_never_reaches_zero() {
        let mut arr = DynamicArray::new();
        arr.append(1).unwrap();
        arr.pop().unwrap();
        assert_eq!(arr.capacity(), 1);
        // The next append must still have room to grow into.
        arr.append(2).unwrap();
        arr.append(3).unwrap();
        assert_eq!(arr.capacity(), 2);
        assert_eq!(arr.as_slice(), &[2, 3]);
    }

    #[test]
    fn failed_grow_leaves_state_intact() {
        // A growth factor this large overflows the byte size of the target
        // buffer, which the allocator reports as a recoverable failure.
        let config = ArrayConfig {
            initial_capacity: 1,
            growth_factor: usize::MAX / 4,
            shrink_threshold: 1e-30,
            ..ArrayConfig::default()
        };
        let mut arr = DynamicArray::with_config(config).unwrap();
        arr.append(1).unwrap();
        let ledger_before = arr.ledger().clone();

        let err = arr.append(2).unwrap_err();
        assert!(matches!(err, ArrayError::AllocationFailure { .. }));
        assert_eq!(arr.len(), 1);
        assert_eq!(arr.capacity(), 1);
        assert_eq!(arr.get(0), Ok(1));
        assert_eq!(arr.ledger(), &ledger_before);
        assert_eq!(arr.metrics().failed_allocations, 1);
        assert_eq!(arr.metrics().appends, 1);
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let result = DynamicArray::with_config(ArrayConfig::new(0));
        assert!(matches!(result, Err(ArrayError::InvalidConfig { .. })));
    }

    #[test]
    fn display_lists_present_elements_only() {
        let arr = filled(3);
        assert_eq!(
            arr.to_string(),
            "DynamicArray: size=3, capacity=10, [0, 1, 2]"
        );
    }

    #[test]
    fn iter_matches_get() {
        let arr = filled(12);
        for (i, v) in arr.iter().enumerate() {
            assert_eq!(arr.get(i), Ok(*v));
        }
        assert_eq!((&arr).into_iter().count(), 12);
    }

    #[test]
    fn peak_capacity_survives_shrink() {
        let mut arr = filled(21);
        assert_eq!(arr.capacity(), 40);
        while arr.pop().is_ok() {}
        assert!(arr.capacity() < 40);
        assert_eq!(arr.metrics().peak_capacity, 40);
    }
}
