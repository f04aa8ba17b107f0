//! Player commands sent from the input layer to the simulation.
//!
//! Commands are either applied immediately or queued for processing at the
//! next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::DefenceType;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start the next wave. Only allowed when no enemies remain.
    SpawnWave,
    /// Upgrade the defence in a slot by one level.
    Upgrade { slot: usize },
    /// Buy a level-1 defence into the owned pool.
    Buy { defence_type: DefenceType },
    /// Move an owned defence of this type into an empty slot.
    Place { defence_type: DefenceType, slot: usize },
    /// Move a slotted defence back to the owned pool.
    Withdraw { slot: usize },
    /// Exchange the contents of two slots.
    Swap { slot_a: usize, slot_b: usize },
    /// Change the slotted defence to the next type, keeping its level.
    CycleType { slot: usize },
}
