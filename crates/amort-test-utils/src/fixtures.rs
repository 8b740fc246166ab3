//! Reusable arrays and operation scripts.
//!
//! - [`filled`] / [`filled_with`] build arrays holding `0..n`.
//! - [`grow_then_drain`] is the sequence that exposes an under-charged pop.
//! - [`sawtooth`] oscillates across a resize boundary.

use amort_array::{ArrayConfig, DynamicArray};

use crate::Op;

/// Default-config array holding `0..n` in order.
pub fn filled(n: i64) -> DynamicArray {
    filled_with(ArrayConfig::default(), n)
}

/// Array built from `config` holding `0..n` in order.
///
/// # Panics
///
/// Panics if `config` is invalid or an append fails.
pub fn filled_with(config: ArrayConfig, n: i64) -> DynamicArray {
    let mut arr = DynamicArray::with_config(config).expect("fixture config must be valid");
    arr.try_extend(0..n).expect("fixture appends must succeed");
    arr
}

/// `n` appends of `0..n` followed by `n` pops.
pub fn grow_then_drain(n: i64) -> Vec<Op> {
    (0..n)
        .map(Op::Append)
        .chain((0..n).map(|_| Op::Pop))
        .collect()
}

/// Fill to `base`, then bounce `depth` elements up and down `rounds` times.
pub fn sawtooth(base: i64, depth: i64, rounds: usize) -> Vec<Op> {
    let mut ops: Vec<Op> = (0..base).map(Op::Append).collect();
    for _ in 0..rounds {
        ops.extend((0..depth).map(|v| Op::Append(base + v)));
        ops.extend((0..depth).map(|_| Op::Pop));
    }
    ops
}
