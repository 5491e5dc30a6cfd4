use tally::VoteCellState;

use crate::{
    constants::CELL_DATA_CAPACITY,
    context::{GroupSide, ScriptContext, SysFailure},
    error::{ErrorCode, Result},
    state::VoteCells,
};

/// Loads and decodes the consumed and recreated vote cells.
///
/// The script group must hold exactly one cell on each side; a missing cell or
/// a second one is rejected before any data is interpreted.
pub fn load_vote_cells<C: ScriptContext>(ctx: &C) -> Result<VoteCells> {
    let input = load_state(ctx, GroupSide::Input)?;
    let output = load_state(ctx, GroupSide::Output)?;

    if input.option_count() != output.option_count() {
        return Err(ErrorCode::InvalidData);
    }

    Ok(VoteCells { input, output })
}

fn load_state<C: ScriptContext>(ctx: &C, side: GroupSide) -> Result<VoteCellState> {
    ensure_single_cell(ctx, side)?;

    let mut buf = [0u8; CELL_DATA_CAPACITY];
    let len = match ctx.load_cell_data(side, 0, &mut buf) {
        Ok(len) => len,
        Err(SysFailure::LengthNotEnough(_)) => return Err(ErrorCode::ResourceLimit),
        Err(err) => return Err(err.into()),
    };

    Ok(VoteCellState::from_le_bytes(&buf[..len])?)
}

fn ensure_single_cell<C: ScriptContext>(ctx: &C, side: GroupSide) -> Result<()> {
    // Probing with an empty buffer only asks whether the cell exists.
    let present = |index| match ctx.load_cell_data(side, index, &mut []) {
        Ok(_) | Err(SysFailure::LengthNotEnough(_)) => Ok(true),
        Err(SysFailure::IndexOutOfBound) => Ok(false),
        Err(err) => Err(ErrorCode::from(err)),
    };

    match (present(0)?, present(1)?) {
        (true, false) => Ok(()),
        _ => Err(ErrorCode::GroupCardinality),
    }
}
