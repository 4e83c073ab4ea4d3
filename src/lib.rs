//! Lakeside - a top-down fishing game for the terminal.
//!
//! This crate exposes the game logic for the binaries and for testing. The
//! terminal UI lives in the `lakeside` binary.

pub mod build_info;
pub mod config;
pub mod core;
pub mod equipment;
pub mod fishing;
pub mod input;
pub mod notifications;
pub mod save_manager;
pub mod shop;
pub mod simulator;
pub mod world;
