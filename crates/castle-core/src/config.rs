//! Static configuration handed to the simulation at construction time.
//!
//! Defaults reproduce the standard game balance. Every struct deserializes
//! with `#[serde(default)]` so a JSON file only needs the values it overrides.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::*;
use crate::enums::DefenceType;
use crate::error::ConfigError;
use crate::layout::Layout;

/// Base statistics of one defence type at level 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenceStats {
    pub damage: f32,
    pub range: f32,
    /// Seconds between shots.
    pub cooldown: f32,
    pub projectile_speed: f32,
    /// Probability in [0, 1] that a shot is a critical hit.
    pub crit_chance: f32,
    pub crit_multiplier: f32,
    /// Upgrade cost multiplier: upgrading from level L costs `base_cost * L`.
    pub base_cost: u32,
    /// Price of a new level-1 instance in the shop.
    pub shop_cost: u32,
    pub max_hp: f32,
    /// Impact radius; zero means single-target projectiles.
    pub area_radius: f32,
}

/// Stats after level scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveStats {
    pub damage: f32,
    pub range: f32,
    pub cooldown: f32,
    pub projectile_speed: f32,
}

impl DefenceStats {
    /// Scale the base stats to `level` (1-based).
    pub fn at_level(&self, level: u32) -> EffectiveStats {
        let steps = level.saturating_sub(1) as f32;
        EffectiveStats {
            damage: self.damage * (1.0 + LEVEL_DAMAGE_GAIN * steps),
            range: self.range * (1.0 + LEVEL_RANGE_GAIN * steps),
            cooldown: (self.cooldown * (1.0 - LEVEL_COOLDOWN_REDUCTION * steps))
                .max(MIN_COOLDOWN_SECS),
            projectile_speed: self.projectile_speed
                * (1.0 + LEVEL_PROJECTILE_SPEED_GAIN * steps),
        }
    }

    /// Gold needed to upgrade from `current_level` to the next level.
    pub fn upgrade_cost(&self, current_level: u32) -> u32 {
        self.base_cost.saturating_mul(current_level)
    }
}

/// Stats for every defence type.
///
/// Deserializes as a patch over the defaults: an entry only needs the
/// fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefenceStatsTable {
    pub archer: DefenceStats,
    pub cannon: DefenceStats,
    pub mage: DefenceStats,
}

impl DefenceStatsTable {
    pub fn get(&self, kind: DefenceType) -> &DefenceStats {
        match kind {
            DefenceType::Archer => &self.archer,
            DefenceType::Cannon => &self.cannon,
            DefenceType::Mage => &self.mage,
        }
    }

    pub fn get_mut(&mut self, kind: DefenceType) -> &mut DefenceStats {
        match kind {
            DefenceType::Archer => &mut self.archer,
            DefenceType::Cannon => &mut self.cannon,
            DefenceType::Mage => &mut self.mage,
        }
    }
}

impl Default for DefenceStatsTable {
    fn default() -> Self {
        Self {
            archer: DefenceStats {
                damage: 8.0,
                range: 300.0,
                cooldown: 0.4,
                projectile_speed: 450.0,
                crit_chance: DEFENCE_CRIT_CHANCE,
                crit_multiplier: DEFENCE_CRIT_MULTIPLIER,
                base_cost: 30,
                shop_cost: 40,
                max_hp: DEFENCE_MAX_HP,
                area_radius: 0.0,
            },
            cannon: DefenceStats {
                damage: 25.0,
                range: 220.0,
                cooldown: 1.1,
                projectile_speed: 350.0,
                crit_chance: DEFENCE_CRIT_CHANCE,
                crit_multiplier: DEFENCE_CRIT_MULTIPLIER,
                base_cost: 50,
                shop_cost: 80,
                max_hp: DEFENCE_MAX_HP,
                area_radius: 0.0,
            },
            mage: DefenceStats {
                damage: 12.0,
                range: 280.0,
                cooldown: 0.7,
                projectile_speed: 400.0,
                crit_chance: DEFENCE_CRIT_CHANCE,
                crit_multiplier: DEFENCE_CRIT_MULTIPLIER,
                base_cost: 40,
                shop_cost: 100,
                max_hp: DEFENCE_MAX_HP,
                area_radius: MAGE_AREA_RADIUS,
            },
        }
    }
}

impl<'de> Deserialize<'de> for DefenceStatsTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let patch = DefenceStatsTablePatch::deserialize(deserializer)?;
        let defaults = Self::default();
        Ok(Self {
            archer: patch.archer.apply(defaults.archer),
            cannon: patch.cannon.apply(defaults.cannon),
            mage: patch.mage.apply(defaults.mage),
        })
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct DefenceStatsTablePatch {
    archer: DefenceStatsPatch,
    cannon: DefenceStatsPatch,
    mage: DefenceStatsPatch,
}

/// `DefenceStats` with every field optional.
#[derive(Default, Deserialize)]
#[serde(default)]
struct DefenceStatsPatch {
    damage: Option<f32>,
    range: Option<f32>,
    cooldown: Option<f32>,
    projectile_speed: Option<f32>,
    crit_chance: Option<f32>,
    crit_multiplier: Option<f32>,
    base_cost: Option<u32>,
    shop_cost: Option<u32>,
    max_hp: Option<f32>,
    area_radius: Option<f32>,
}

impl DefenceStatsPatch {
    fn apply(self, base: DefenceStats) -> DefenceStats {
        DefenceStats {
            damage: self.damage.unwrap_or(base.damage),
            range: self.range.unwrap_or(base.range),
            cooldown: self.cooldown.unwrap_or(base.cooldown),
            projectile_speed: self.projectile_speed.unwrap_or(base.projectile_speed),
            crit_chance: self.crit_chance.unwrap_or(base.crit_chance),
            crit_multiplier: self.crit_multiplier.unwrap_or(base.crit_multiplier),
            base_cost: self.base_cost.unwrap_or(base.base_cost),
            shop_cost: self.shop_cost.unwrap_or(base.shop_cost),
            max_hp: self.max_hp.unwrap_or(base.max_hp),
            area_radius: self.area_radius.unwrap_or(base.area_radius),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Speed before the per-wave bonus.
    pub base_speed: f32,
    /// Side of the square bounding box.
    pub size: f32,
    pub max_hp: f32,
    pub attack_range: f32,
    pub damage_per_second: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            base_speed: ENEMY_BASE_SPEED,
            size: ENEMY_SIZE,
            max_hp: ENEMY_MAX_HP,
            attack_range: ENEMY_ATTACK_RANGE,
            damage_per_second: ENEMY_DAMAGE_PER_SECOND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub starting_gold: u32,
    pub gold_per_kill: u32,
    /// Multiplied by the wave number (at least 1) when a wave is cleared.
    pub gold_per_wave_clear: u32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_gold: STARTING_GOLD,
            gold_per_kill: GOLD_PER_KILL,
            gold_per_wave_clear: GOLD_PER_WAVE_CLEAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastleConfig {
    pub max_hp: f32,
}

impl Default for CastleConfig {
    fn default() -> Self {
        Self {
            max_hp: CASTLE_MAX_HP,
        }
    }
}

/// Lifetimes of the purely visual feedback records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    pub damage_number_lifetime: f32,
    pub damage_number_rise_speed: f32,
    pub area_effect_lifetime: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            damage_number_lifetime: DAMAGE_NUMBER_LIFETIME,
            damage_number_rise_speed: DAMAGE_NUMBER_RISE_SPEED,
            area_effect_lifetime: AREA_EFFECT_LIFETIME,
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed = same simulation.
    pub seed: u64,
    /// Fixed ticks per second used by `tick()`.
    pub tick_rate: u32,
    pub defences: DefenceStatsTable,
    pub enemy: EnemyConfig,
    pub economy: EconomyConfig,
    pub castle: CastleConfig,
    pub effects: EffectConfig,
    pub layout: Layout,
    /// Defence placed in each slot at start (index = slot).
    pub starting_loadout: Vec<Option<DefenceType>>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            defences: DefenceStatsTable::default(),
            enemy: EnemyConfig::default(),
            economy: EconomyConfig::default(),
            castle: CastleConfig::default(),
            effects: EffectConfig::default(),
            layout: Layout::default(),
            starting_loadout: vec![Some(DefenceType::Archer); DEFAULT_SLOT_COUNT],
        }
    }
}

impl SimConfig {
    /// Seconds per fixed tick.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be positive".into()));
        }
        for kind in DefenceType::ALL {
            let stats = self.defences.get(kind);
            if stats.cooldown <= 0.0 {
                return Err(ConfigError::Invalid(format!("{kind} cooldown must be positive")));
            }
            if stats.projectile_speed <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{kind} projectile_speed must be positive"
                )));
            }
            if stats.max_hp <= 0.0 {
                return Err(ConfigError::Invalid(format!("{kind} max_hp must be positive")));
            }
            if !(0.0..=1.0).contains(&stats.crit_chance) {
                return Err(ConfigError::Invalid(format!(
                    "{kind} crit_chance must be within [0, 1]"
                )));
            }
        }
        if self.enemy.size <= 0.0 {
            return Err(ConfigError::Invalid("enemy size must be positive".into()));
        }
        if self.castle.max_hp <= 0.0 {
            return Err(ConfigError::Invalid("castle max_hp must be positive".into()));
        }
        if self.starting_loadout.len() > self.layout.slots.len() {
            return Err(ConfigError::Invalid(format!(
                "starting_loadout has {} entries but the layout only has {} slots",
                self.starting_loadout.len(),
                self.layout.slots.len()
            )));
        }
        Ok(())
    }
}
