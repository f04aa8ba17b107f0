//! Enemy combat: target acquisition, movement and attack damage.

use glam::Vec2;

use castle_core::components::Defence;
use castle_core::enums::{AttackTarget, EnemyState};

use crate::world::World;

/// Run enemy behaviour for one tick.
///
/// Defences in range take damage immediately. Damage aimed at the castle is
/// only accumulated and returned, so the engine can apply it once per tick;
/// `Castle::apply_damage` drops whatever exceeds the remaining hp.
pub fn run(world: &mut World, castle_center: Vec2, damage_per_second: f32, dt: f32) -> f32 {
    let World { enemies, slots, .. } = world;
    let damage = damage_per_second * dt;
    let mut castle_damage = 0.0;

    for enemy in enemies.iter_mut().filter(|e| e.alive) {
        let (target, point) = acquire_target(enemy.position, castle_center, slots);
        enemy.target = target;

        let to_target = point - enemy.position;
        let distance_sq = to_target.length_squared();

        if distance_sq <= enemy.attack_range * enemy.attack_range {
            enemy.state = EnemyState::Attacking;
            match target {
                AttackTarget::Castle => castle_damage += damage,
                AttackTarget::Defence { slot } => {
                    if let Some(defence) = slots[slot].as_mut() {
                        defence.take_damage(damage);
                    }
                }
            }
            continue;
        }

        enemy.state = EnemyState::Moving;
        let Some(direction) = to_target.try_normalize() else {
            continue;
        };
        let step = (enemy.speed * dt).min(distance_sq.sqrt());
        enemy.position += direction * step;
    }

    castle_damage
}

/// Nearest attackable point by squared distance.
///
/// The castle is the baseline; a defence replaces it only when strictly
/// closer, and earlier slots win ties between defences.
pub fn acquire_target(
    from: Vec2,
    castle_center: Vec2,
    slots: &[Option<Defence>],
) -> (AttackTarget, Vec2) {
    let mut best = (AttackTarget::Castle, castle_center);
    let mut best_sq = from.distance_squared(castle_center);

    for (slot, defence) in slots.iter().enumerate() {
        let Some(defence) = defence else { continue };
        if defence.is_dead() {
            continue;
        }
        let d_sq = from.distance_squared(defence.position);
        if d_sq < best_sq {
            best_sq = d_sq;
            best = (AttackTarget::Defence { slot }, defence.position);
        }
    }

    best
}
