//! Fishing system: session state machine, catch resolution and random source.

pub mod catch;
pub mod logic;
pub mod rng;
pub mod types;

pub use catch::*;
pub use logic::*;
pub use rng::*;
pub use types::*;
