use thiserror::Error;

/// Reasons a counter array or a proposed transition is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyError {
    #[error("counter payload of {len} bytes is not a whole number of u32 counters")]
    Misaligned { len: usize },

    #[error("counter payload of {len} bytes holds more than {max} options", max = crate::MAX_OPTIONS)]
    TooManyOptions { len: usize },

    #[error("option count changed from {input} to {output}")]
    OptionCountMismatch { input: usize, output: usize },

    #[error("selected option {selection} is outside 0..{option_count}")]
    SelectionOutOfRange { selection: u8, option_count: usize },

    #[error("counter for option {index} is already at u32::MAX")]
    Overflow { index: usize },

    #[error("counter for option {index} does not match the expected tally")]
    Mismatch { index: usize },
}

pub type Result<T> = core::result::Result<T, TallyError>;
