//! Systems that operate on the mission state each tick.
//!
//! Systems are pure functions over `&mut SimulationState` (or `&SimulationState` for the
//! read-only derivers). They do not own state; all state lives in the store.

pub mod crew;
pub mod fuel;
pub mod kinematics;
pub mod metrics;
pub mod timeline;
