use tally::Selection;

use crate::{
    error::{ErrorCode, Result},
    state::VoteCells,
};

/// Accepts only when the output counters are the input counters with one vote
/// counted for `selection`.
///
/// Returns the new counter of the selected option.
pub fn verify_transition(cells: &VoteCells, selection: Selection) -> Result<u32> {
    tally::verify_vote(&cells.input, &cells.output, selection)?;
    cells.output.get(selection).ok_or(ErrorCode::InvalidData)
}
