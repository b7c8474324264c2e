//! Random spawn points and waypoints.

use rand::Rng;

use duckhunt_core::constants::{DUCK_DRAW_SIZE, WAYPOINT_HEIGHT_FRACTION};
use duckhunt_core::types::{Position, Viewport};

/// Pick a waypoint in the upper part of the screen, kept a half-sprite away
/// from the edges when the surface is large enough.
pub fn random_waypoint(rng: &mut impl Rng, viewport: &Viewport) -> Position {
    let margin = DUCK_DRAW_SIZE * 0.5;
    let x = sample(rng, margin, viewport.width - margin);
    let y = sample(rng, margin, viewport.height * WAYPOINT_HEIGHT_FRACTION);
    Position::new(x, y)
}

/// Ducks take off from the bottom edge at a random column.
pub fn spawn_point(rng: &mut impl Rng, viewport: &Viewport) -> Position {
    let margin = DUCK_DRAW_SIZE * 0.5;
    let x = sample(rng, margin, viewport.width - margin);
    Position::new(x, viewport.height)
}

/// Uniform sample in `[lo, hi)`, collapsing to the midpoint when the range is empty.
fn sample(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        ((lo + hi) * 0.5).max(0.0)
    }
}
