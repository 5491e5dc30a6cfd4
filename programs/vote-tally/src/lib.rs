//! Type script for a single vote-tally cell.
//!
//! Each transaction that consumes and recreates the cell must count exactly
//! one vote: the new counters equal the old ones with the option declared in
//! the input's `WitnessArgs.input_type` incremented by one.

#![cfg_attr(not(test), no_std)]

// ckb_std::debug! formats through `alloc` in debug builds.
#[cfg(target_arch = "riscv64")]
extern crate alloc;

pub mod constants;
pub mod context;
pub mod error;
pub mod handlers;
pub mod state;

#[cfg(target_arch = "riscv64")]
pub mod ckb;

pub use context::{GroupSide, ScriptContext, SysFailure};
pub use error::ErrorCode;
pub use state::{VoteCells, VoteCounted};

/// Runs every check against the current transaction, failing on the first
/// violation.
///
/// Order: type id, then both cells, then the declared option, then the tally.
pub fn verify<C: ScriptContext>(ctx: &C) -> error::Result<VoteCounted> {
    let type_id = handlers::verify_type_id(ctx)?;
    let cells = handlers::load_vote_cells(ctx)?;
    let selection = handlers::load_selection(ctx)?;
    let count = handlers::verify_transition(&cells, selection)?;

    Ok(VoteCounted {
        type_id,
        selection,
        count,
    })
}
