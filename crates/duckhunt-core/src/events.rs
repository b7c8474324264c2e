//! Events emitted by the simulation for audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// One-shot notifications produced during a tick, drained into the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A shell was spent at the given screen point.
    ShotFired { at: Position },
    /// The trigger was pulled with an empty magazine.
    ShotDropped,
    /// A flying duck was downed.
    DuckHit { duck_id: u64, points: u32 },
    /// A duck ran out of time and is fleeing.
    DuckEscaped { duck_id: u64, strikes: u32 },
    /// A new round began.
    LevelUp { round: u32 },
    /// The magazine was refilled after running dry.
    Reloaded,
    /// Third strike.
    GameOver { final_score: u32 },
}
