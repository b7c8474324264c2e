//! Simulation engine for DUCKHUNT.
//!
//! Owns the hecs ECS world, runs systems once per rendered frame,
//! and produces GameStateSnapshots and draw lists for the browser shell.

pub mod engine;
pub mod render;
pub mod round;
pub mod systems;
pub mod timers;
pub mod world_setup;

pub use duckhunt_core as core;
pub use engine::{SimConfig, SimulationEngine};
