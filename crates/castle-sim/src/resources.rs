//! Game-wide counters that are not entities: gold, wave number, castle hp.
//!
//! Stored in `SimulationEngine` next to the world.

use castle_core::error::CommandError;
use serde::{Deserialize, Serialize};

/// Gold balance and wave counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Economy {
    pub gold: u32,
    /// Number of waves spawned so far. Never decreases.
    pub wave_number: u32,
}

impl Economy {
    pub fn new(starting_gold: u32) -> Self {
        Self {
            gold: starting_gold,
            wave_number: 0,
        }
    }

    /// Debit `cost` if the balance covers it; otherwise leave gold untouched.
    pub fn try_spend(&mut self, cost: u32) -> Result<(), CommandError> {
        if self.gold < cost {
            return Err(CommandError::InsufficientGold {
                needed: cost,
                available: self.gold,
            });
        }
        self.gold -= cost;
        Ok(())
    }

    pub fn credit(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Castle {
    pub hp: f32,
    pub max_hp: f32,
}

impl Castle {
    pub fn new(max_hp: f32) -> Self {
        Self { hp: max_hp, max_hp }
    }

    /// Subtract up to the remaining (unrounded) hp. Returns the amount
    /// actually applied, which is zero once the castle is destroyed.
    pub fn apply_damage(&mut self, amount: f32) -> f32 {
        let applied = amount.clamp(0.0, self.hp.max(0.0));
        self.hp = (self.hp - applied).max(0.0);
        applied
    }

    pub fn is_destroyed(&self) -> bool {
        self.hp <= 0.0
    }
}
