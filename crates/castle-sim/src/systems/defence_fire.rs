//! Defence fire control: cooldowns, target selection and projectile launch.

use rand::Rng;
use tracing::debug;

use castle_core::components::Projectile;

use crate::world::{alloc_id, World};

/// Advance every slotted defence's shot timer and fire where possible.
///
/// Generic over the RNG so tests can force or suppress critical hits.
pub fn run<R: Rng + ?Sized>(world: &mut World, rng: &mut R, dt: f32) {
    let World {
        slots,
        enemies,
        projectiles,
        next_id,
        ..
    } = world;

    for defence in slots.iter_mut().flatten() {
        if defence.is_dead() {
            continue;
        }

        defence.time_since_last_shot += dt;
        if defence.time_since_last_shot < defence.stats.cooldown {
            continue;
        }

        // First enemy in range by spawn order, not the nearest one.
        let range_sq = defence.stats.range * defence.stats.range;
        let Some(target) = enemies
            .iter()
            .find(|e| e.alive && defence.position.distance_squared(e.position) <= range_sq)
        else {
            continue;
        };

        let Some(direction) = (target.position - defence.position).try_normalize() else {
            continue;
        };

        let crit = rng.gen::<f32>() < defence.base.crit_chance;
        let damage = if crit {
            defence.stats.damage * defence.base.crit_multiplier
        } else {
            defence.stats.damage
        };

        let id = alloc_id(next_id);
        debug!(
            projectile = id,
            defence = %defence.kind,
            target = target.id,
            damage,
            crit,
            "defence fired"
        );
        projectiles.push(Projectile {
            id,
            origin: defence.position,
            position: defence.position,
            velocity: direction * defence.stats.projectile_speed,
            damage,
            max_distance: defence.stats.range,
            area_radius: defence.base.area_radius,
            crit,
            source: defence.kind,
            alive: true,
        });
        defence.time_since_last_shot = 0.0;
    }
}
