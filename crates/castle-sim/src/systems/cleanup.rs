//! Cleanup system: removes destroyed defences and dead entities.

use tracing::info;

use castle_core::events::GameEvent;

use crate::world::World;

/// Empty every slot whose defence has been destroyed.
pub fn prune_destroyed_defences(world: &mut World, events: &mut Vec<GameEvent>) {
    for (slot, entry) in world.slots.iter_mut().enumerate() {
        if !entry.as_ref().is_some_and(|d| d.is_dead()) {
            continue;
        }
        if let Some(defence) = entry.take() {
            info!(slot, defence = %defence.kind, level = defence.level, "defence destroyed");
            events.push(GameEvent::DefenceDestroyed {
                slot,
                defence_type: defence.kind,
            });
        }
    }
}

/// Drop dead projectiles, dead enemies and expired area effects.
pub fn run(world: &mut World) {
    world.projectiles.retain(|p| p.alive);
    world.enemies.retain(|e| e.alive);
    world.area_effects.retain(|a| !a.is_dead());
}
