//! Game state snapshot: the complete visible state handed to a renderer each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::EffectiveStats;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub gold: u32,
    pub wave_number: u32,
    pub can_spawn_wave: bool,
    /// Size of the wave `SpawnWave` would start.
    pub next_wave_enemy_count: u32,
    pub castle: CastleView,
    pub enemies: Vec<EnemyView>,
    /// One entry per layout slot; `None` for empty slots.
    pub slots: Vec<Option<DefenceView>>,
    /// Bought or withdrawn defences waiting to be placed.
    pub owned: Vec<OwnedDefenceView>,
    pub projectiles: Vec<ProjectileView>,
    pub area_effects: Vec<AreaEffectView>,
    pub damage_numbers: Vec<DamageNumberView>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CastleView {
    pub hp: f32,
    pub max_hp: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    pub state: EnemyState,
    pub target: AttackTarget,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenceView {
    pub defence_type: DefenceType,
    pub level: u32,
    pub position: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    pub stats: EffectiveStats,
    pub crit_chance: f32,
    pub crit_multiplier: f32,
    pub upgrade_cost: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedDefenceView {
    pub defence_type: DefenceType,
    pub level: u32,
    pub hp: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub source: DefenceType,
    pub crit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaEffectView {
    pub position: Vec2,
    pub radius: f32,
    /// 1.0 fresh, 0.0 expired.
    pub fade: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageNumberView {
    pub position: Vec2,
    pub amount: f32,
    pub crit: bool,
    pub alpha: u8,
}
