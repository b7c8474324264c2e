//! Game state snapshot: the complete visible state handed to the page each frame.

use serde::{Deserialize, Serialize};

use crate::constants::{ROUND_DURATION_SECS, SCORE_DIGITS};
use crate::enums::{DuckPhase, Facing, GamePhase};
use crate::events::GameEvent;
use crate::sprite::SpriteRect;
use crate::types::{Position, SimTime, Viewport};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub ducks: Vec<DuckView>,
    pub crosshair: CrosshairView,
    pub hud: HudView,
    /// Present while the level-up banner is showing.
    pub banner: Option<BannerView>,
    pub events: Vec<GameEvent>,
}

/// A duck as the renderer needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuckView {
    pub id: u64,
    pub position: Position,
    pub phase: DuckPhase,
    pub frame: u8,
    pub facing: Facing,
    pub sprite: SpriteRect,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrosshairView {
    pub position: Position,
    /// False while the detector reports no hand; the pointer is then frozen.
    pub hand_visible: bool,
    pub pinching: bool,
}

/// Values written to the HUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    /// Score zero-padded to six digits.
    pub score_text: String,
    pub best_score: u32,
    pub round: u32,
    pub ammo: u32,
    pub strikes: u32,
    pub seconds_left: u32,
    pub kills_this_round: u32,
    pub max_ducks: u32,
}

impl Default for HudView {
    fn default() -> Self {
        Self {
            score: 0,
            score_text: format_score(0),
            best_score: 0,
            round: 1,
            ammo: 0,
            strikes: 0,
            seconds_left: ROUND_DURATION_SECS as u32,
            kills_this_round: 0,
            max_ducks: 1,
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BannerView {
    pub round: u32,
}

/// Zero-pad a score for the HUD. Scores wider than the field are not truncated.
pub fn format_score(score: u32) -> String {
    format!("{:0width$}", score, width = SCORE_DIGITS)
}

/// Whole seconds shown on the round clock, clamped to the round length.
pub fn display_seconds(remaining_secs: f64) -> u32 {
    remaining_secs.ceil().clamp(0.0, ROUND_DURATION_SECS) as u32
}
