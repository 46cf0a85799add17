//! Simulation engine for ODIN.
//!
//! Owns the mission state store, steps it once per host tick,
//! derives live metrics, and notifies subscribers after every mutation.

pub mod advisory;
pub mod clock;
pub mod config;
pub mod engine;
pub mod observers;
pub mod systems;

pub use clock::{ManualClock, MissionClock, SystemClock};
pub use config::SimConfig;
pub use engine::MissionEngine;
pub use observers::Subscription;
pub use odin_core as core;
