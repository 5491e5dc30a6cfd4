//! Vote-tally arithmetic for the vote cell.
//!
//! Everything here is chain-agnostic and allocation-free so the same code
//! runs inside CKB-VM and in host-side tests.

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod state;

pub use error::{Result, TallyError};
pub use state::{Selection, VoteCellState};

/// Maximum number of options a vote cell can carry.
pub const MAX_OPTIONS: usize = 64;

/// Bytes per encoded counter.
pub const COUNTER_WIDTH: usize = core::mem::size_of::<u32>();

/// Checks that `output` is exactly `input` with one vote counted for
/// `selection`.
///
/// # Arguments
/// * `input` - Counters of the consumed vote cell
/// * `output` - Counters of the recreated vote cell
/// * `selection` - The option the transaction declares it votes for
///
/// # Errors
/// * [`TallyError::OptionCountMismatch`] if the two cells carry a different number of options
/// * [`TallyError::SelectionOutOfRange`] if `selection` names no option
/// * [`TallyError::Overflow`] if the selected counter is already at `u32::MAX`
/// * [`TallyError::Mismatch`] at the first option where `output` differs from the expected tally
pub fn verify_vote(
    input: &VoteCellState,
    output: &VoteCellState,
    selection: Selection,
) -> Result<()> {
    if input.option_count() != output.option_count() {
        return Err(TallyError::OptionCountMismatch {
            input: input.option_count(),
            output: output.option_count(),
        });
    }

    let expected = input.with_vote(selection)?;
    match expected.first_difference(output) {
        Some(index) => Err(TallyError::Mismatch { index }),
        None => Ok(()),
    }
}
