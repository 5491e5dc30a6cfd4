//! [`ScriptContext`] over CKB-VM syscalls.

use ckb_std::{
    ckb_constants::Source,
    ckb_types::prelude::*,
    debug,
    error::SysError,
    high_level, syscalls, type_id,
};

use crate::context::{GroupSide, ScriptContext, SysFailure};
use crate::handlers::TypeId;

/// The transaction currently being verified by the node.
pub struct CkbContext;

impl From<SysError> for SysFailure {
    fn from(err: SysError) -> Self {
        match err {
            SysError::IndexOutOfBound => SysFailure::IndexOutOfBound,
            SysError::ItemMissing => SysFailure::ItemMissing,
            SysError::LengthNotEnough(len) => SysFailure::LengthNotEnough(len),
            SysError::Encoding => SysFailure::Encoding,
            SysError::Unknown(code) => SysFailure::Unknown(code),
            other => {
                debug!("unexpected syscall error: {:?}", other);
                SysFailure::Unknown(u64::MAX)
            }
        }
    }
}

impl From<GroupSide> for Source {
    fn from(side: GroupSide) -> Self {
        match side {
            GroupSide::Input => Source::GroupInput,
            GroupSide::Output => Source::GroupOutput,
        }
    }
}

impl ScriptContext for CkbContext {
    fn load_script_args(&self, buf: &mut [u8]) -> Result<usize, SysFailure> {
        let script = high_level::load_script()?;
        let args = script.args().raw_data();

        let copied = args.len().min(buf.len());
        buf[..copied].copy_from_slice(&args[..copied]);
        if args.len() > buf.len() {
            return Err(SysFailure::LengthNotEnough(args.len()));
        }
        Ok(args.len())
    }

    fn validate_identity(&self, type_id: &TypeId) -> Result<(), SysFailure> {
        type_id::validate_type_id(type_id.0).map_err(|err| {
            debug!("type id validation failed: {:?}", err);
            SysFailure::from(err)
        })
    }

    fn load_cell_data(
        &self,
        side: GroupSide,
        index: usize,
        buf: &mut [u8],
    ) -> Result<usize, SysFailure> {
        Ok(syscalls::load_cell_data(buf, 0, index, side.into())?)
    }

    fn load_witness(&self, index: usize, buf: &mut [u8]) -> Result<usize, SysFailure> {
        Ok(syscalls::load_witness(buf, 0, index, Source::GroupInput)?)
    }
}
