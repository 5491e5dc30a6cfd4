use core::fmt;

use tally::Selection;

use crate::handlers::TypeId;

/// Summary of an accepted vote, written to the debug log by the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteCounted {
    pub type_id: TypeId,
    pub selection: Selection,
    /// Counter of the selected option after this vote
    pub count: u32,
}

impl fmt::Display for VoteCounted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vote cell 0x")?;
        for byte in &self.type_id.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(
            f,
            ".. counted option {} (now {})",
            self.selection.0, self.count
        )
    }
}
