//! Entity records owned by the simulation world.
//!
//! These are plain data with a few small invariant-keeping helpers
//! (hp clamping, level scaling). Per-tick behaviour lives in the systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{DefenceStats, EffectiveStats};
use crate::enums::*;
use crate::types::Rect;

/// A walking attacker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Centre of the bounding box.
    pub position: Vec2,
    pub speed: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub state: EnemyState,
    /// Target chosen on the most recent tick.
    pub target: AttackTarget,
    pub attack_range: f32,
    /// Side of the square bounding box.
    pub size: f32,
    pub alive: bool,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.position, self.size, self.size)
    }

    /// Subtract `amount` hp. Returns true if this hit killed the enemy.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.alive {
            return false;
        }
        self.hp -= amount;
        if self.hp <= 0.0 {
            self.hp = 0.0;
            self.alive = false;
            return true;
        }
        false
    }
}

/// A player-owned shooter. Lives either in a slot or in the owned pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defence {
    pub kind: DefenceType,
    /// 1-based upgrade level.
    pub level: u32,
    /// Centre of the slot holding this defence.
    pub position: Vec2,
    pub hp: f32,
    /// Level-1 stats for `kind`.
    pub base: DefenceStats,
    /// `base` scaled to `level`.
    pub stats: EffectiveStats,
    pub time_since_last_shot: f32,
}

impl Defence {
    pub fn new(kind: DefenceType, base: DefenceStats, position: Vec2) -> Self {
        Self {
            kind,
            level: 1,
            position,
            hp: base.max_hp,
            base,
            stats: base.at_level(1),
            time_since_last_shot: 0.0,
        }
    }

    pub fn max_hp(&self) -> f32 {
        self.base.max_hp
    }

    pub fn upgrade_cost(&self) -> u32 {
        self.base.upgrade_cost(self.level)
    }

    /// Raise the level by one and rescale the stats.
    pub fn upgrade(&mut self) {
        self.level += 1;
        self.recalculate_stats();
    }

    pub fn recalculate_stats(&mut self) {
        self.stats = self.base.at_level(self.level);
    }

    /// Swap in another type's stats, keeping level and position.
    pub fn retype(&mut self, kind: DefenceType, base: DefenceStats) {
        self.kind = kind;
        self.base = base;
        self.hp = self.hp.min(base.max_hp);
        self.time_since_last_shot = 0.0;
        self.recalculate_stats();
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.hp = (self.hp - amount).clamp(0.0, self.base.max_hp);
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }
}

/// A shot in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub origin: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
    pub damage: f32,
    /// Maximum distance from `origin` before the shot fizzles.
    pub max_distance: f32,
    /// Zero for single-target shots.
    pub area_radius: f32,
    pub crit: bool,
    pub source: DefenceType,
    pub alive: bool,
}

impl Projectile {
    pub fn is_area(&self) -> bool {
        self.area_radius > 0.0
    }

    pub fn distance_travelled(&self) -> f32 {
        self.origin.distance(self.position)
    }
}

/// Visual ring left by an area impact. Damage was already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaEffect {
    pub position: Vec2,
    pub radius: f32,
    pub age: f32,
    pub lifetime: f32,
}

impl AreaEffect {
    pub fn new(position: Vec2, radius: f32, lifetime: f32) -> Self {
        Self {
            position,
            radius,
            age: 0.0,
            lifetime,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.age += dt;
    }

    pub fn is_dead(&self) -> bool {
        self.age >= self.lifetime
    }

    /// 1.0 when fresh, 0.0 when expired.
    pub fn fade(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age / self.lifetime).clamp(0.0, 1.0)
    }
}

/// Floating damage text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageNumber {
    pub position: Vec2,
    pub velocity: Vec2,
    pub amount: f32,
    pub crit: bool,
    pub age: f32,
    pub lifetime: f32,
    pub alpha: u8,
}

impl DamageNumber {
    pub fn new(position: Vec2, amount: f32, crit: bool, lifetime: f32, rise_speed: f32) -> Self {
        Self {
            position,
            velocity: Vec2::new(0.0, -rise_speed),
            amount,
            crit,
            age: 0.0,
            lifetime,
            alpha: u8::MAX,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        self.position += self.velocity * dt;
        let t = if self.lifetime > 0.0 {
            self.age / self.lifetime
        } else {
            1.0
        };
        self.alpha = (255.0 * (1.0 - t)).clamp(0.0, 255.0) as u8;
    }

    pub fn is_dead(&self) -> bool {
        self.age >= self.lifetime || self.alpha == 0
    }
}
