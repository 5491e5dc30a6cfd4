use tally::VoteCellState;

/// The vote cell before and after the transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteCells {
    /// Counters of the consumed cell
    pub input: VoteCellState,
    /// Counters of the recreated cell, same option count as `input`
    pub output: VoteCellState,
}
