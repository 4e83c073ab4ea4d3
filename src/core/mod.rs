//! Core game state, tick orchestration and player actions.

pub mod constants;
pub mod game_logic;
pub mod game_state;
pub mod tick;

pub use game_logic::*;
pub use game_state::GameState;
pub use tick::{game_tick, TickEvent};
