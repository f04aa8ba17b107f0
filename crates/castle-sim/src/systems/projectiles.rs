//! Projectile flight, collision and damage application.
//!
//! A projectile deals damage at most once: whichever path lands a hit also
//! flags the projectile dead, and dead projectiles are skipped until cleanup.

use glam::Vec2;
use tracing::debug;

use castle_core::components::*;
use castle_core::config::EffectConfig;
use castle_core::events::GameEvent;

use crate::world::World;

/// Move every live projectile and resolve hits.
pub fn run(world: &mut World, effects: &EffectConfig, dt: f32, events: &mut Vec<GameEvent>) {
    let World {
        projectiles,
        enemies,
        area_effects,
        damage_numbers,
        ..
    } = world;

    for projectile in projectiles.iter_mut().filter(|p| p.alive) {
        projectile.position += projectile.velocity * dt;

        if projectile.distance_travelled() >= projectile.max_distance {
            projectile.alive = false;
            continue;
        }

        if projectile.is_area() {
            resolve_area(projectile, enemies, area_effects, damage_numbers, effects, events);
        } else {
            resolve_single(projectile, enemies, damage_numbers, effects, events);
        }
    }
}

/// First enemy whose box contains the projectile takes the full hit.
fn resolve_single(
    projectile: &mut Projectile,
    enemies: &mut [Enemy],
    damage_numbers: &mut Vec<DamageNumber>,
    effects: &EffectConfig,
    events: &mut Vec<GameEvent>,
) {
    let Some(enemy) = enemies
        .iter_mut()
        .find(|e| e.alive && e.bounds().contains(projectile.position))
    else {
        return;
    };

    hit(projectile, enemy, damage_numbers, effects, events);
    projectile.alive = false;
}

/// On first contact with any enemy, damage every enemy whose centre is
/// within the radius of the impact point (boundary included).
fn resolve_area(
    projectile: &mut Projectile,
    enemies: &mut [Enemy],
    area_effects: &mut Vec<AreaEffect>,
    damage_numbers: &mut Vec<DamageNumber>,
    effects: &EffectConfig,
    events: &mut Vec<GameEvent>,
) {
    let impact = projectile.position;
    if !enemies
        .iter()
        .any(|e| e.alive && e.bounds().contains(impact))
    {
        return;
    }

    area_effects.push(AreaEffect::new(
        impact,
        projectile.area_radius,
        effects.area_effect_lifetime,
    ));

    let radius_sq = projectile.area_radius * projectile.area_radius;
    for enemy in enemies
        .iter_mut()
        .filter(|e| e.alive && within(e.position, impact, radius_sq))
    {
        hit(projectile, enemy, damage_numbers, effects, events);
    }

    projectile.alive = false;
}

fn within(point: Vec2, center: Vec2, radius_sq: f32) -> bool {
    point.distance_squared(center) <= radius_sq
}

fn hit(
    projectile: &Projectile,
    enemy: &mut Enemy,
    damage_numbers: &mut Vec<DamageNumber>,
    effects: &EffectConfig,
    events: &mut Vec<GameEvent>,
) {
    let killed = enemy.take_damage(projectile.damage);
    damage_numbers.push(DamageNumber::new(
        enemy.bounds().mid_top(),
        projectile.damage,
        projectile.crit,
        effects.damage_number_lifetime,
        effects.damage_number_rise_speed,
    ));

    if killed {
        debug!(enemy = enemy.id, by = %projectile.source, "enemy killed");
        events.push(GameEvent::EnemyKilled {
            enemy_id: enemy.id,
            by: projectile.source,
        });
    }
}
