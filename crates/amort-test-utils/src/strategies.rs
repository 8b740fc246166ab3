//! Proptest strategies for operation scripts.

use proptest::prelude::*;

use crate::Op;

/// A single operation, appends and pops equally likely.
pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![any::<i64>().prop_map(Op::Append), Just(Op::Pop)]
}

/// A script of up to `max_len` operations with a fixed append weight.
///
/// `append_weight` out of 10 operations are appends on average; the weight
/// is clamped to `1..=9` so both kinds always appear.
pub fn weighted_ops(append_weight: u32, max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    let append_weight = append_weight.clamp(1, 9);
    let pop_weight = 10 - append_weight;
    let one = prop_oneof![
        append_weight => any::<i64>().prop_map(Op::Append),
        pop_weight => Just(Op::Pop),
    ];
    proptest::collection::vec(one, 0..max_len)
}

/// A script whose append bias is itself random, so runs cover fill-heavy,
/// drain-heavy and balanced phases.
pub fn op_sequence(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    (1u32..10).prop_flat_map(move |w| weighted_ops(w, max_len))
}

/// Runs of appends followed by runs of pops, repeated.
///
/// Drives the array repeatedly across grow and shrink boundaries.
pub fn bursts(max_bursts: usize, max_run: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec((1..max_run, 1..max_run), 1..max_bursts).prop_map(|runs| {
        let mut ops = Vec::new();
        for (ups, downs) in runs {
            ops.extend((0..ups as i64).map(Op::Append));
            ops.extend(std::iter::repeat_n(Op::Pop, downs));
        }
        ops
    })
}
