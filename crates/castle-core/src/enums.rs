//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Defence archetype. Selects a row of the stats table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenceType {
    /// Fast single-target shots.
    #[default]
    Archer,
    /// Slow, heavy single-target shots.
    Cannon,
    /// Area-of-effect shots.
    Mage,
}

impl DefenceType {
    pub const ALL: [DefenceType; 3] = [Self::Archer, Self::Cannon, Self::Mage];

    /// Next type in shop order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Archer => Self::Cannon,
            Self::Cannon => Self::Mage,
            Self::Mage => Self::Archer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Archer => "archer",
            Self::Cannon => "cannon",
            Self::Mage => "mage",
        }
    }
}

impl fmt::Display for DefenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enemy behaviour state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    #[default]
    Moving,
    Attacking,
}

/// What an enemy is currently heading for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackTarget {
    #[default]
    Castle,
    /// The defence occupying this slot.
    Defence { slot: usize },
}

/// Top-level game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    /// Castle destroyed. Terminal.
    GameOver,
}

/// Why gold was credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoldReason {
    Kills,
    WaveClear,
}
