//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a duck.
///
/// Hit and falling ducks carry the vertical fall velocity; flying and
/// fleeing ducks have none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DuckStatus {
    #[default]
    Flying,
    /// Stunned in place. `ticks` counts frames spent in this pose.
    Hit { ticks: u32, fall_velocity: f32 },
    /// Dropping toward the bottom of the screen.
    Falling { fall_velocity: f32 },
    /// Escaping off the top of the screen.
    Fleeing,
}

impl DuckStatus {
    pub fn kind(&self) -> DuckPhase {
        match self {
            DuckStatus::Flying => DuckPhase::Flying,
            DuckStatus::Hit { .. } => DuckPhase::Hit,
            DuckStatus::Falling { .. } => DuckPhase::Falling,
            DuckStatus::Fleeing => DuckPhase::Fleeing,
        }
    }

    pub fn is_flying(&self) -> bool {
        matches!(self, DuckStatus::Flying)
    }

    /// Whether moving from `self` to `next` is an edge of the duck state graph.
    /// Staying in the same phase is always allowed.
    pub fn can_transition_to(&self, next: &DuckStatus) -> bool {
        use DuckPhase::*;
        matches!(
            (self.kind(), next.kind()),
            (Flying, Flying | Hit | Fleeing)
                | (Hit, Hit | Falling)
                | (Falling, Falling)
                | (Fleeing, Fleeing)
        )
    }
}

/// Payload-free tag of a duck status, used for display and sprite lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuckPhase {
    Flying,
    Hit,
    Falling,
    Fleeing,
}

/// Horizontal direction the duck sprite faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// How a single shot is resolved when several flying ducks are in range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitPolicy {
    /// Every flying duck inside the hit radius is downed and credited.
    #[default]
    Splash,
    /// Only the nearest flying duck inside the hit radius is downed.
    SingleTarget,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}
