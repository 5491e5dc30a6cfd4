use tally::TallyError;
use thiserror::Error;

use crate::context::SysFailure;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    #[error("Vote cell data is malformed or the declared option is invalid")]
    InvalidData,
    #[error("Extension field is not a WitnessArgs carrying input_type")]
    Encoding,
    #[error("Vote counter would overflow")]
    Overflow,
    #[error("Output counters do not match the expected tally")]
    Mismatch,
    #[error("Type id is missing or not bound to this transaction")]
    Identity,
    #[error("Payload exceeds its fixed capacity")]
    ResourceLimit,
    #[error("Script group must hold exactly one input and one output cell")]
    GroupCardinality,
    #[error("Syscall failed with code {0}")]
    Syscall(i8),
}

impl ErrorCode {
    /// Exit code reported to the node. Zero is reserved for acceptance.
    pub const fn code(self) -> i8 {
        match self {
            ErrorCode::InvalidData => -1,
            ErrorCode::Encoding => -2,
            ErrorCode::Overflow => -3,
            ErrorCode::Mismatch => -4,
            ErrorCode::Identity => -5,
            ErrorCode::ResourceLimit => -6,
            ErrorCode::GroupCardinality => -7,
            ErrorCode::Syscall(code) => code,
        }
    }
}

impl From<TallyError> for ErrorCode {
    fn from(err: TallyError) -> Self {
        match err {
            TallyError::Misaligned { .. }
            | TallyError::OptionCountMismatch { .. }
            | TallyError::SelectionOutOfRange { .. } => ErrorCode::InvalidData,
            TallyError::TooManyOptions { .. } => ErrorCode::ResourceLimit,
            TallyError::Overflow { .. } => ErrorCode::Overflow,
            TallyError::Mismatch { .. } => ErrorCode::Mismatch,
        }
    }
}

/// Fallback for syscall failures a handler has no specific meaning for.
impl From<SysFailure> for ErrorCode {
    fn from(err: SysFailure) -> Self {
        ErrorCode::Syscall(err.code())
    }
}

pub type Result<T> = core::result::Result<T, ErrorCode>;
