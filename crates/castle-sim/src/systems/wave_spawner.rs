//! Wave spawning. Waves are started manually as batches of enemies.

use glam::Vec2;
use tracing::info;

use castle_core::config::SimConfig;
use castle_core::constants::{ENEMY_SPEED_PER_WAVE, WAVE_BASE_ENEMIES, WAVE_ENEMIES_PER_LEVEL};
use castle_core::events::GameEvent;

use crate::resources::Economy;
use crate::world::World;
use crate::world_setup;

/// Enemies spawned by wave `wave`.
pub fn enemy_count(wave: u32) -> u32 {
    WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_LEVEL * wave
}

/// Walking speed of every enemy in wave `wave`.
pub fn enemy_speed(base_speed: f32, wave: u32) -> f32 {
    base_speed + ENEMY_SPEED_PER_WAVE * wave as f32
}

/// A new wave may start only once no live enemy remains.
pub fn can_spawn(world: &World) -> bool {
    !world.enemies.iter().any(|e| e.alive)
}

/// Start the next wave: bump the counter and spread its enemies evenly along
/// the bottom edge of the spawn strip. The caller checks `can_spawn` first.
pub fn spawn_wave(world: &mut World, economy: &mut Economy, config: &SimConfig) -> GameEvent {
    economy.wave_number += 1;
    let wave = economy.wave_number;

    let count = enemy_count(wave);
    let speed = enemy_speed(config.enemy.base_speed, wave);
    let spawn = config.layout.spawn;
    let spacing = spawn.width / count as f32;
    let y = spawn.bottom() + config.enemy.size / 2.0;

    for i in 0..count {
        let x = spawn.left() + (i as f32 + 0.5) * spacing;
        world_setup::spawn_enemy(world, config, Vec2::new(x, y), speed);
    }

    info!(wave, enemies = count, speed, "wave spawned");
    GameEvent::WaveSpawned {
        wave,
        enemy_count: count,
    }
}
