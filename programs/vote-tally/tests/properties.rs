//! Property tests over the whole script, driven through [`MockTx`].

mod common;

use common::MockTx;
use proptest::prelude::*;
use vote_tally::{verify, ErrorCode};

fn tally() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..u32::MAX, 1..=64)
}

proptest! {
    #[test]
    fn prop_single_increment_is_accepted(counts in tally(), pick: prop::sample::Index) {
        let option = pick.index(counts.len());
        let mut next = counts.clone();
        next[option] += 1;

        let tx = MockTx::vote(&counts, &next, Some(&[option as u8]));
        let counted = verify(&tx).unwrap();
        prop_assert_eq!(counted.count, next[option]);
    }

    #[test]
    fn prop_tampered_output_is_a_mismatch(
        counts in tally(),
        pick: prop::sample::Index,
        tamper: prop::sample::Index,
        delta in 1..u32::MAX,
    ) {
        let option = pick.index(counts.len());
        let index = tamper.index(counts.len());
        let mut next = counts.clone();
        next[option] += 1;
        next[index] = next[index].wrapping_add(delta);

        let tx = MockTx::vote(&counts, &next, Some(&[option as u8]));
        prop_assert_eq!(verify(&tx), Err(ErrorCode::Mismatch));
    }

    #[test]
    fn prop_option_count_change_is_invalid(
        input in tally(),
        output in tally(),
        option: u8,
    ) {
        prop_assume!(input.len() != output.len());
        let tx = MockTx::vote(&input, &output, Some(&[option]));
        prop_assert_eq!(verify(&tx), Err(ErrorCode::InvalidData));
    }

    #[test]
    fn prop_saturated_counter_overflows(counts in tally(), pick: prop::sample::Index) {
        let option = pick.index(counts.len());
        let mut input = counts.clone();
        input[option] = u32::MAX;
        let mut output = input.clone();
        output[option] = 0;

        let tx = MockTx::vote(&input, &output, Some(&[option as u8]));
        prop_assert_eq!(verify(&tx), Err(ErrorCode::Overflow));
    }

    #[test]
    fn prop_intent_must_be_one_byte(counts in tally(), intent in prop::collection::vec(any::<u8>(), 2..16)) {
        let tx = MockTx::vote(&counts, &counts, Some(intent.as_slice()));
        prop_assert_eq!(verify(&tx), Err(ErrorCode::InvalidData));
    }

    #[test]
    fn prop_verdict_is_deterministic(counts in tally(), output in tally(), option: u8) {
        let tx = MockTx::vote(&counts, &output, Some(&[option]));
        prop_assert_eq!(verify(&tx), verify(&tx.clone()));
    }
}
