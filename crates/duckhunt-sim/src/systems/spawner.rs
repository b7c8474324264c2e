//! Spawning system. Keeps the sky filled up to the concurrent-duck limit.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use duckhunt_core::components::Duck;
use duckhunt_core::types::Viewport;

use crate::world_setup::spawn_duck;

/// Spawn ducks until `max_ducks` are active. Returns the new duck ids.
///
/// Falling and fleeing ducks still count as active until they leave the
/// screen, so a replacement only appears once the old duck is gone.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_duck_id: &mut u64,
    round: u32,
    max_ducks: u32,
    viewport: &Viewport,
    now_ms: f64,
) -> Vec<u64> {
    let active = world.query::<&Duck>().iter().count() as u32;
    let mut spawned = Vec::new();

    for _ in active..max_ducks {
        let id = *next_duck_id;
        *next_duck_id += 1;
        spawn_duck(world, rng, id, round, viewport, now_ms);
        debug!(duck_id = id, round, "duck spawned");
        spawned.push(id);
    }
    spawned
}
