//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use duckhunt_core::components::*;
use duckhunt_core::enums::GamePhase;
use duckhunt_core::events::GameEvent;
use duckhunt_core::sprite::sprite_rect;
use duckhunt_core::state::*;
use duckhunt_core::types::{Position, SimTime, Viewport};

use crate::round::RoundTracker;

/// Everything outside the ECS world that the snapshot needs.
pub struct SnapshotInputs<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub round: &'a RoundTracker,
    /// Remaining round time in seconds, already frozen for paused or finished games.
    pub remaining_secs: f64,
    pub banner: Option<u32>,
    pub crosshair: CrosshairView,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    inputs: SnapshotInputs<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: inputs.time,
        phase: inputs.phase,
        viewport: inputs.viewport,
        ducks: build_ducks(world),
        crosshair: inputs.crosshair,
        hud: build_hud(inputs.round, inputs.remaining_secs),
        banner: inputs.banner.map(|round| BannerView { round }),
        events,
    }
}

/// Ducks sorted by id so the draw order is stable.
fn build_ducks(world: &World) -> Vec<DuckView> {
    let mut ducks: Vec<DuckView> = world
        .query::<(&Duck, &Position, &Behavior, &WingAnimation)>()
        .iter()
        .map(|(_, (duck, pos, behavior, anim))| {
            let phase = behavior.status.kind();
            DuckView {
                id: duck.id,
                position: *pos,
                phase,
                frame: anim.frame,
                facing: anim.facing,
                sprite: sprite_rect(phase, anim.frame, anim.facing),
            }
        })
        .collect();
    ducks.sort_by_key(|d| d.id);
    ducks
}

fn build_hud(round: &RoundTracker, remaining_secs: f64) -> HudView {
    HudView {
        score: round.score,
        score_text: format_score(round.score),
        best_score: round.best_score,
        round: round.round,
        ammo: round.ammo,
        strikes: round.strikes,
        seconds_left: display_seconds(remaining_secs),
        kills_this_round: round.kills_this_round,
        max_ducks: round.max_concurrent_ducks,
    }
}
