//! Round-driven difficulty parameters.
//!
//! Consolidates the per-round numbers the spawner and hit resolution need.

use duckhunt_core::constants::*;
use duckhunt_core::types::Viewport;

/// Parameters for ducks spawned during one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundProfile {
    /// Scalar duck speed.
    pub duck_speed: f32,
    /// Time aloft before the duck flees (ms).
    pub lifetime_ms: f64,
}

/// Get the difficulty profile for a given round.
pub fn get_profile(round: u32) -> RoundProfile {
    RoundProfile {
        duck_speed: duck_speed(round),
        lifetime_ms: duck_lifetime_ms(round),
    }
}

pub fn duck_speed(round: u32) -> f32 {
    DUCK_BASE_SPEED + round as f32 * DUCK_SPEED_PER_ROUND
}

/// Lifetime shrinks every round down to a fixed floor.
pub fn duck_lifetime_ms(round: u32) -> f64 {
    (DUCK_BASE_LIFETIME_MS - round as f64 * DUCK_LIFETIME_STEP_MS).max(DUCK_MIN_LIFETIME_MS)
}

/// Hit radius in pixels for the current surface.
pub fn hit_radius(viewport: &Viewport) -> f32 {
    viewport.width * HIT_RADIUS_FRACTION
}

/// Points for one hit during `round`.
pub fn hit_reward(round: u32) -> u32 {
    BASE_REWARD + round * ROUND_BONUS
}
