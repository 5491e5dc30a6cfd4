pub mod events;
pub mod vote_cells;

pub use events::VoteCounted;
pub use vote_cells::VoteCells;
