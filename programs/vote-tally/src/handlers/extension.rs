use ckb_gen_types::packed::WitnessArgsReader;
use molecule::prelude::*;
use tally::Selection;

use crate::{
    constants::WITNESS_CAPACITY,
    context::{ScriptContext, SysFailure},
    error::{ErrorCode, Result},
};

/// Loads the witness of the vote cell's input and extracts the declared option.
pub fn load_selection<C: ScriptContext>(ctx: &C) -> Result<Selection> {
    let mut witness = [0u8; WITNESS_CAPACITY];
    let len = match ctx.load_witness(0, &mut witness) {
        Ok(len) => len,
        Err(SysFailure::LengthNotEnough(_)) => return Err(ErrorCode::ResourceLimit),
        Err(SysFailure::IndexOutOfBound) => return Err(ErrorCode::Encoding),
        Err(err) => return Err(err.into()),
    };

    decode_selection(&witness[..len])
}

/// Decodes a `WitnessArgs` and reads the option index from `input_type`.
///
/// `input_type` is the only channel for the voter's choice and must hold
/// exactly one byte. One vote per transaction.
pub fn decode_selection(witness: &[u8]) -> Result<Selection> {
    let witness_args = WitnessArgsReader::from_slice(witness).map_err(|_| ErrorCode::Encoding)?;
    let declared = witness_args
        .input_type()
        .to_opt()
        .ok_or(ErrorCode::Encoding)?;

    match declared.raw_data() {
        [option] => Ok(Selection(*option)),
        _ => Err(ErrorCode::InvalidData),
    }
}
