//! ODIN mission host.
//!
//! This crate wires the headless engine to a mission log and the trajectory catalog,
//! and runs it either frame by frame on a loop thread or fast-forwarded on a
//! virtual clock.

pub mod config;
pub mod control;
pub mod error;
pub mod game_loop;
pub mod mission_log;
pub mod state;

pub use odin_core as core;
pub use odin_sim as sim;
