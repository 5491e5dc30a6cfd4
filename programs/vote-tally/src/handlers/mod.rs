pub mod identity;
pub use identity::*;

pub mod cell_data;
pub use cell_data::*;

pub mod extension;
pub use extension::*;

pub mod transition;
pub use transition::*;
