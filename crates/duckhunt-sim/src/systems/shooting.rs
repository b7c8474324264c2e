//! Shot resolution. Tests the crosshair against every flying duck.

use hecs::{Entity, World};

use duckhunt_core::components::{Behavior, Duck};
use duckhunt_core::enums::HitPolicy;
use duckhunt_core::types::Position;

use duckhunt_duck_ai::fsm::struck;

/// Resolve one shot at `at`. Flying ducks within `radius` are knocked into
/// the hit state. Returns the ids of downed ducks in ascending order.
pub fn resolve(world: &mut World, at: Position, radius: f32, policy: HitPolicy) -> Vec<u64> {
    let mut in_range: Vec<(Entity, u64, f32)> = world
        .query::<(&Duck, &Position, &Behavior)>()
        .iter()
        .filter(|(_, (_, _, behavior))| behavior.status.is_flying())
        .map(|(entity, (duck, pos, _))| (entity, duck.id, pos.distance_to(&at)))
        .filter(|(_, _, distance)| *distance <= radius)
        .collect();

    if policy == HitPolicy::SingleTarget {
        in_range.sort_by(|a, b| a.2.total_cmp(&b.2).then(a.1.cmp(&b.1)));
        in_range.truncate(1);
    }
    in_range.sort_by_key(|(_, id, _)| *id);

    for (entity, _, _) in &in_range {
        if let Ok(mut behavior) = world.get::<&mut Behavior>(*entity) {
            behavior.status = struck();
        }
    }

    in_range.into_iter().map(|(_, id, _)| id).collect()
}
