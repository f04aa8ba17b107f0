//! Entity storage for one running game.
//!
//! Plain vectors keep insertion order, which defence targeting depends on
//! (the first enemy in range wins). Dead entities are only flagged during a
//! tick and compacted by the cleanup system at the end of it.

use castle_core::components::*;

#[derive(Debug, Clone, Default)]
pub struct World {
    /// Active enemies in spawn order.
    pub enemies: Vec<Enemy>,
    /// One entry per layout slot. A defence is owned by exactly one slot
    /// or by the owned pool, never both.
    pub slots: Vec<Option<Defence>>,
    /// Bought or withdrawn defences not placed in any slot.
    pub owned: Vec<Defence>,
    pub projectiles: Vec<Projectile>,
    pub area_effects: Vec<AreaEffect>,
    pub damage_numbers: Vec<DamageNumber>,
    /// Next id handed to an enemy or projectile.
    pub next_id: u32,
}

impl World {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
            ..Default::default()
        }
    }

    pub fn alloc_id(&mut self) -> u32 {
        alloc_id(&mut self.next_id)
    }

    pub fn live_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    /// Occupied slots with their index, in slot order.
    pub fn defences(&self) -> impl Iterator<Item = (usize, &Defence)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|d| (i, d)))
    }

    pub fn defence(&self, slot: usize) -> Option<&Defence> {
        self.slots.get(slot).and_then(Option::as_ref)
    }
}

/// Id allocation usable while other world fields are mutably borrowed.
pub fn alloc_id(next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id = next_id.wrapping_add(1);
    id
}
