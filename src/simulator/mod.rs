//! Catch simulator for Monte Carlo analysis of the fishing minigame.
//!
//! Plays thousands of sessions per rod level with a scripted angler to check:
//! - How often sessions land a fish versus snap the line
//! - How long a session takes to resolve
//! - Whether the species mix matches the rod-adjusted weights
//!
//! Sessions run through the same `FishingMachine` the game uses.

mod config;
mod report;
mod runner;

pub use config::{HoldPolicy, SimConfig};
pub use report::{RodReport, SimReport, SpeciesRow};
pub use runner::run_simulation;
