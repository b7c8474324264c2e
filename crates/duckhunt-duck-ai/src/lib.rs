//! Duck AI for DUCKHUNT.
//!
//! Implements the duck behavior state machine, wing animation,
//! waypoint selection and round-driven difficulty tables.

pub mod difficulty;
pub mod fsm;
pub mod waypoints;

pub use duckhunt_core as core;

#[cfg(test)]
mod tests;
