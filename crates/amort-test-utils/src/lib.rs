//! Test utilities for Amort development.
//!
//! Provides an [`Op`] script type that drives a [`DynamicArray`], a
//! [`ModelArray`] oracle that predicts size, capacity, contents, and credit
//! balance independently of the real implementation, plus fixtures and
//! proptest strategies built on both.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

use amort_array::{ArrayConfig, ArrayError, DynamicArray};

/// One scripted operation against a dynamic array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Append(i64),
    Pop,
}

/// Apply `op` to `arr`.
///
/// Returns the popped value for [`Op::Pop`] and `None` for [`Op::Append`].
pub fn apply(arr: &mut DynamicArray, op: Op) -> Result<Option<i64>, ArrayError> {
    match op {
        Op::Append(v) => arr.append(v).map(|()| None),
        Op::Pop => arr.pop().map(Some),
    }
}

/// Straight-line model of the resize policy and credit scheme.
///
/// Uses a plain `Vec` for contents and recomputes capacity and credits from
/// the config with no shared code paths, so disagreements point at the real
/// array.
#[derive(Clone, Debug)]
pub struct ModelArray {
    pub values: Vec<i64>,
    pub capacity: usize,
    pub credits: i64,
    pub grows: u64,
    pub shrinks: u64,
    config: ArrayConfig,
}

impl ModelArray {
    pub fn new(config: ArrayConfig) -> Self {
        Self {
            values: Vec::new(),
            capacity: config.initial_capacity,
            credits: 0,
            grows: 0,
            shrinks: 0,
            config,
        }
    }

    pub fn apply(&mut self, op: Op) -> Result<Option<i64>, ArrayError> {
        match op {
            Op::Append(v) => {
                self.credits += self.config.append_charge;
                if self.values.len() == self.capacity {
                    self.credits -= self.values.len() as i64;
                    self.capacity *= self.config.growth_factor;
                    self.grows += 1;
                }
                self.values.push(v);
                self.credits -= 1;
                Ok(None)
            }
            Op::Pop => {
                let size = self.values.len();
                if size == 0 {
                    return Err(ArrayError::EmptyArray);
                }
                self.credits += self.config.pop_charge;
                let ratio = (size - 1) as f64 / self.capacity as f64;
                if ratio < self.config.shrink_threshold {
                    let target = ((size - 1) * self.config.growth_factor)
                        .max(size)
                        .max(self.config.min_capacity);
                    if target < self.capacity {
                        self.credits -= size as i64;
                        self.capacity = target;
                        self.shrinks += 1;
                    }
                }
                self.credits -= 1;
                Ok(self.values.pop())
            }
        }
    }
}

impl Default for ModelArray {
    fn default() -> Self {
        Self::new(ArrayConfig::default())
    }
}
