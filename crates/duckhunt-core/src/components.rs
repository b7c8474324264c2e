//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and the duck FSM, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{DuckStatus, Facing};
use crate::types::Position;

/// Marks an entity as a duck and carries its never-reused identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duck {
    pub id: u64,
}

/// Steering state of a flying duck.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Flight {
    /// Point the duck is currently steering toward.
    pub waypoint: Position,
    /// Scalar speed; scales the per-tick approach rate.
    pub speed: f32,
}

/// Current lifecycle status of the duck.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Behavior {
    pub status: DuckStatus,
}

/// Wing-flap animation state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WingAnimation {
    /// Index into the wing-flap frames.
    pub frame: u8,
    /// Sprite row selector.
    pub facing: Facing,
    /// Ticks since the frame last changed.
    pub ticks: u32,
}

/// Spawn time and allotted time aloft before the duck flees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub spawned_at_ms: f64,
    pub allotted_ms: f64,
}
