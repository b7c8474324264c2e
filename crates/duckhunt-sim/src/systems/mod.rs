//! ECS systems that operate on the game world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components or the engine.

pub mod cleanup;
pub mod flight;
pub mod shooting;
pub mod snapshot;
pub mod spawner;
