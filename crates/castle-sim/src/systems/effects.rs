//! Ageing of purely visual feedback: damage numbers and area rings.

use crate::world::World;

/// Age damage numbers (dropping expired ones) and area effects.
/// Expired area effects are removed by the cleanup system.
pub fn run(world: &mut World, dt: f32) {
    for number in &mut world.damage_numbers {
        number.update(dt);
    }
    world.damage_numbers.retain(|n| !n.is_dead());

    for effect in &mut world.area_effects {
        effect.update(dt);
    }
}
