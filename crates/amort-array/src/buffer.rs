//! Fixed-capacity contiguous storage.
//!
//! A [`Buffer`] is a zero-initialised `Vec<i64>` whose length is its
//! capacity. It never grows in place: a resize allocates a fresh buffer and
//! copies into it, which is the step the credit ledger pays for.

use crate::error::ArrayError;

/// A single fixed-size slot buffer.
#[derive(Debug)]
pub struct Buffer {
    /// Backing storage. Allocated to full capacity at creation.
    slots: Vec<i64>,
}

impl Buffer {
    /// Allocate a buffer of `capacity` zeroed slots.
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the allocator refuses the
    /// request or the byte size overflows. No state is touched on failure.
    pub fn try_new(capacity: usize) -> Result<Self, ArrayError> {
        let requested = capacity
            .checked_mul(std::mem::size_of::<i64>())
            .unwrap_or(usize::MAX);
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| ArrayError::AllocationFailure { requested })?;
        // Reserved above, so this never reallocates.
        slots.resize(capacity, 0);
        Ok(Self { slots })
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Read the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    pub fn read(&self, index: usize) -> i64 {
        self.slots[index]
    }

    /// Overwrite the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    pub fn write(&mut self, index: usize, value: i64) {
        self.slots[index] = value;
    }

    /// The first `len` slots.
    ///
    /// # Panics
    ///
    /// Panics if `len > capacity()`.
    pub fn slice(&self, len: usize) -> &[i64] {
        &self.slots[..len]
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<i64>()
    }
}
