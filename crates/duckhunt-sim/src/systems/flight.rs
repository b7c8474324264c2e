//! Flight system. Advances every duck's state machine by one tick.
//!
//! Calls the duck FSM from duckhunt-duck-ai, then writes the result back
//! into the ECS components.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use duckhunt_core::components::*;
use duckhunt_core::types::{Position, Viewport};

use duckhunt_duck_ai::fsm::{animate, evaluate, facing_toward, DuckContext};
use duckhunt_duck_ai::waypoints::random_waypoint;

/// Run the duck FSM for every duck.
///
/// Returns the ids of ducks that escaped this tick. Ducks that left the
/// screen are pushed onto `despawn_buffer` for the cleanup system.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    viewport: &Viewport,
    now_ms: f64,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<u64> {
    let mut escaped = Vec::new();

    for (entity, (duck, pos, flight, behavior, anim, lifetime)) in world.query_mut::<(
        &Duck,
        &mut Position,
        &mut Flight,
        &mut Behavior,
        &mut WingAnimation,
        &Lifetime,
    )>() {
        let ctx = DuckContext {
            status: behavior.status,
            position: *pos,
            waypoint: flight.waypoint,
            speed: flight.speed,
            elapsed_ms: now_ms - lifetime.spawned_at_ms,
            lifetime_ms: lifetime.allotted_ms,
            viewport: *viewport,
        };

        let update = evaluate(&ctx);
        debug_assert!(behavior.status.can_transition_to(&update.new_status));

        anim.facing = facing_toward(pos, &update.new_position, anim.facing);
        *pos = update.new_position;
        behavior.status = update.new_status;
        *anim = animate(*anim, behavior.status.kind());

        if update.reached_waypoint {
            flight.waypoint = random_waypoint(rng, viewport);
        }
        if update.escaped {
            escaped.push(duck.id);
        }
        if update.offscreen {
            despawn_buffer.push(entity);
        }
    }

    escaped.sort_unstable();
    escaped
}
