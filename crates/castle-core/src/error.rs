//! Error types for rejected commands and bad configuration.

use thiserror::Error;

use crate::enums::DefenceType;

/// Why a player command was rejected. State is unchanged on every variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("game over")]
    GameOver,
    #[error("wave in progress")]
    WaveInProgress,
    #[error("not enough gold (need {needed}, have {available})")]
    InsufficientGold { needed: u32, available: u32 },
    #[error("no slot {0}")]
    InvalidSlot(usize),
    #[error("slot {0} is empty")]
    EmptySlot(usize),
    #[error("slot {0} is occupied")]
    SlotOccupied(usize),
    #[error("no owned {0} to place")]
    NoOwnedDefence(DefenceType),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
