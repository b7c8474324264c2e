//! Player commands sent from the page to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player / page actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Reset all game state and start playing. Doubles as restart.
    StartGame,
    /// Abandon the current game and return to the menu.
    ReturnToMenu,
    /// Freeze the simulation (page hidden).
    Pause,
    /// Continue after a pause; clocks are shifted by the paused duration.
    Resume,
    /// The drawing surface changed size.
    ResizeViewport { width: f32, height: f32 },
}
