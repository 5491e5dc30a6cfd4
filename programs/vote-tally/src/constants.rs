use tally::{COUNTER_WIDTH, MAX_OPTIONS};

/// Length of the type id carried at offset 0 of the script args.
pub const TYPE_ID_LEN: usize = 32;

/// Largest cell data payload a vote cell may carry: 64 options of 4 bytes.
pub const CELL_DATA_CAPACITY: usize = MAX_OPTIONS * COUNTER_WIDTH;

/// Largest witness the extension decoder will load.
pub const WITNESS_CAPACITY: usize = 32 * 1024;
