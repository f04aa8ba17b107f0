//! Events emitted by the simulation for UI and audio feedback.
//!
//! Events are observational only; the simulation never reads them back.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    WaveSpawned {
        wave: u32,
        enemy_count: u32,
    },
    EnemyKilled {
        enemy_id: u32,
        by: DefenceType,
    },
    GoldAwarded {
        amount: u32,
        reason: GoldReason,
    },
    WaveCleared {
        wave: u32,
        bonus: u32,
    },
    CastleDamaged {
        amount: f32,
        remaining: f32,
    },
    DefenceDestroyed {
        slot: usize,
        defence_type: DefenceType,
    },
    DefencePurchased {
        defence_type: DefenceType,
        cost: u32,
    },
    DefenceUpgraded {
        slot: usize,
        defence_type: DefenceType,
        level: u32,
        cost: u32,
    },
    DefencePlaced {
        slot: usize,
        defence_type: DefenceType,
    },
    DefenceWithdrawn {
        slot: usize,
        defence_type: DefenceType,
    },
    SlotsSwapped {
        slot_a: usize,
        slot_b: usize,
    },
    DefenceRetyped {
        slot: usize,
        defence_type: DefenceType,
    },
    GameOver {
        wave: u32,
    },
    /// A queued command could not be applied.
    CommandRejected {
        reason: String,
    },
}
