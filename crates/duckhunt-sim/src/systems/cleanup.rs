//! Cleanup system: removes ducks that have left the screen.

use hecs::{Entity, World};

/// Despawn every entity collected in the buffer.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
