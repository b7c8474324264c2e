//! Entity spawn factories.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use duckhunt_core::components::*;
use duckhunt_core::enums::DuckStatus;
use duckhunt_core::types::{Position, Viewport};

use duckhunt_duck_ai::difficulty::get_profile;
use duckhunt_duck_ai::fsm::facing_toward;
use duckhunt_duck_ai::waypoints::{random_waypoint, spawn_point};

/// Spawn one flying duck at the bottom edge, tuned for `round`.
pub fn spawn_duck(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: u64,
    round: u32,
    viewport: &Viewport,
    now_ms: f64,
) -> hecs::Entity {
    let position = spawn_point(rng, viewport);
    let waypoint = random_waypoint(rng, viewport);
    spawn_duck_at(world, id, round, position, waypoint, now_ms)
}

/// Spawn a duck at an exact position heading for an exact waypoint.
pub fn spawn_duck_at(
    world: &mut World,
    id: u64,
    round: u32,
    position: Position,
    waypoint: Position,
    now_ms: f64,
) -> hecs::Entity {
    let profile = get_profile(round);

    world.spawn((
        Duck { id },
        position,
        Flight {
            waypoint,
            speed: profile.duck_speed,
        },
        Behavior {
            status: DuckStatus::Flying,
        },
        WingAnimation {
            facing: facing_toward(&position, &waypoint, Default::default()),
            ..Default::default()
        },
        Lifetime {
            spawned_at_ms: now_ms,
            allotted_ms: profile.lifetime_ms,
        },
    ))
}
