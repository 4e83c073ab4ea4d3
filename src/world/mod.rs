//! The overworld: lake, shop board, player movement and the day clock.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
