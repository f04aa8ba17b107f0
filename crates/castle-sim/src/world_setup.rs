//! Entity factories for setting up the simulation world.

use glam::Vec2;

use castle_core::components::*;
use castle_core::config::SimConfig;
use castle_core::enums::*;

use crate::world::World;

/// Build the initial world: empty lists and the starting loadout in its slots.
pub fn build_world(config: &SimConfig) -> World {
    let mut world = World::new(config.layout.slots.len());
    for (slot, kind) in config.starting_loadout.iter().enumerate() {
        let Some(kind) = kind else { continue };
        let Some(center) = config.layout.slot_center(slot) else {
            continue;
        };
        world.slots[slot] = Some(make_defence(config, *kind, center));
    }
    world
}

/// A fresh level-1 defence of `kind` at `position`.
pub fn make_defence(config: &SimConfig, kind: DefenceType, position: Vec2) -> Defence {
    Defence::new(kind, *config.defences.get(kind), position)
}

/// Spawn one enemy and return its id.
pub fn spawn_enemy(world: &mut World, config: &SimConfig, position: Vec2, speed: f32) -> u32 {
    let id = world.alloc_id();
    world.enemies.push(Enemy {
        id,
        position,
        speed,
        hp: config.enemy.max_hp,
        max_hp: config.enemy.max_hp,
        state: EnemyState::Moving,
        target: AttackTarget::Castle,
        attack_range: config.enemy.attack_range,
        size: config.enemy.size,
        alive: true,
    });
    id
}

/// Move every slotted defence to its slot centre.
pub fn sync_slot_positions(world: &mut World, config: &SimConfig) {
    for (slot, defence) in world.slots.iter_mut().enumerate() {
        if let (Some(defence), Some(center)) = (defence.as_mut(), config.layout.slot_center(slot)) {
            defence.position = center;
        }
    }
}
