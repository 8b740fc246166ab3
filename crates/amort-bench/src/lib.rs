//! Benchmark workloads for the Amort dynamic array.
//!
//! Provides deterministic operation scripts for benchmarking:
//!
//! - [`fill_profile`]: `n` appends from empty
//! - [`churn_profile`]: seeded mix of appends and pops with a drifting bias
//! - [`replay`]: run a script against a fresh array and return it

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use amort_array::{ArrayConfig, DynamicArray};
use amort_test_utils::{apply, Op};

/// `n` appends of `0..n`.
pub fn fill_profile(n: usize) -> Vec<Op> {
    (0..n as i64).map(Op::Append).collect()
}

/// `len` operations drawn from a seeded linear congruential sequence.
///
/// The append probability alternates between 75% and 20% every 1024
/// operations, so the array repeatedly fills and drains across several
/// capacity doublings.
pub fn churn_profile(seed: u64, len: usize) -> Vec<Op> {
    let mut state = seed;
    let mut ops = Vec::with_capacity(len);
    for i in 0..len {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let phase = (i / 1024) % 2;
        let append_pct = if phase == 0 { 75 } else { 20 };
        let roll = (state >> 33) % 100;
        if roll < append_pct {
            ops.push(Op::Append((state >> 11) as i64));
        } else {
            ops.push(Op::Pop);
        }
    }
    ops
}

/// Apply `ops` to a fresh array built from `config`.
///
/// Pops on an empty array are skipped, matching how scripts are generated.
pub fn replay(config: ArrayConfig, ops: &[Op]) -> DynamicArray {
    let mut arr = DynamicArray::with_config(config).expect("benchmark config must be valid");
    for &op in ops {
        let _ = apply(&mut arr, op);
    }
    arr
}
