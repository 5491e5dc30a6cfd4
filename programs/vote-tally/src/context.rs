//! The transaction as seen by the script.
//!
//! Handlers only talk to the host through [`ScriptContext`]. Inside CKB-VM it
//! is backed by syscalls (see `ckb.rs`); tests back it with in-memory cells.

use crate::handlers::TypeId;

/// Which side of the script group a cell is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSide {
    Input,
    Output,
}

/// Syscall outcomes the handlers care about, independent of the VM binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysFailure {
    /// No item at the requested index.
    IndexOutOfBound,
    /// The item exists but the requested field is absent.
    ItemMissing,
    /// The item is longer than the buffer. Carries the full length; the
    /// buffer holds the leading bytes.
    LengthNotEnough(usize),
    Encoding,
    Unknown(u64),
}

impl SysFailure {
    /// The syscall's own error code, as a non-zero exit code.
    pub fn code(self) -> i8 {
        match self {
            SysFailure::IndexOutOfBound => 1,
            SysFailure::ItemMissing => 2,
            SysFailure::LengthNotEnough(_) => 3,
            SysFailure::Encoding => 4,
            SysFailure::Unknown(code) => match i8::try_from(code) {
                Ok(code) if code != 0 => code,
                _ => i8::MAX,
            },
        }
    }
}

/// Read-only access to the parts of a transaction the vote script inspects.
///
/// Every loader copies into a caller-owned buffer and follows CKB partial
/// loading: `Ok(len)` when the whole item fits, `Err(LengthNotEnough(len))`
/// when only a prefix does, `Err(IndexOutOfBound)` when there is no item.
pub trait ScriptContext {
    /// Loads the args of the running script.
    fn load_script_args(&self, buf: &mut [u8]) -> Result<usize, SysFailure>;

    /// Confirms the type id is bound to this transaction's cell lineage.
    fn validate_identity(&self, type_id: &TypeId) -> Result<(), SysFailure>;

    /// Loads the data of the `index`-th cell on one side of the script group.
    fn load_cell_data(
        &self,
        side: GroupSide,
        index: usize,
        buf: &mut [u8],
    ) -> Result<usize, SysFailure>;

    /// Loads the witness paired with the `index`-th group input.
    fn load_witness(&self, index: usize, buf: &mut [u8]) -> Result<usize, SysFailure>;
}
