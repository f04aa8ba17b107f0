//! Snapshot system: copies the world into a `GameStateSnapshot`.
//!
//! Read-only: it never modifies the world.

use castle_core::components::Defence;
use castle_core::enums::GamePhase;
use castle_core::events::GameEvent;
use castle_core::state::*;
use castle_core::types::SimTime;

use crate::resources::{Castle, Economy};
use crate::systems::wave_spawner;
use crate::world::World;

pub fn build_snapshot(
    world: &World,
    economy: &Economy,
    castle: &Castle,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        gold: economy.gold,
        wave_number: economy.wave_number,
        can_spawn_wave: phase == GamePhase::Active && wave_spawner::can_spawn(world),
        next_wave_enemy_count: wave_spawner::enemy_count(economy.wave_number + 1),
        castle: CastleView {
            hp: castle.hp,
            max_hp: castle.max_hp,
        },
        enemies: build_enemies(world),
        slots: world
            .slots
            .iter()
            .map(|slot| slot.as_ref().map(defence_view))
            .collect(),
        owned: world
            .owned
            .iter()
            .map(|d| OwnedDefenceView {
                defence_type: d.kind,
                level: d.level,
                hp: d.hp,
            })
            .collect(),
        projectiles: world
            .projectiles
            .iter()
            .filter(|p| p.alive)
            .map(|p| ProjectileView {
                id: p.id,
                position: p.position,
                velocity: p.velocity,
                source: p.source,
                crit: p.crit,
            })
            .collect(),
        area_effects: world
            .area_effects
            .iter()
            .map(|a| AreaEffectView {
                position: a.position,
                radius: a.radius,
                fade: a.fade(),
            })
            .collect(),
        damage_numbers: world
            .damage_numbers
            .iter()
            .map(|n| DamageNumberView {
                position: n.position,
                amount: n.amount,
                crit: n.crit,
                alpha: n.alpha,
            })
            .collect(),
        events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .enemies
        .iter()
        .filter(|e| e.alive)
        .map(|e| EnemyView {
            id: e.id,
            position: e.position,
            hp: e.hp,
            max_hp: e.max_hp,
            state: e.state,
            target: e.target,
        })
        .collect()
}

fn defence_view(defence: &Defence) -> DefenceView {
    DefenceView {
        defence_type: defence.kind,
        level: defence.level,
        position: defence.position,
        hp: defence.hp,
        max_hp: defence.max_hp(),
        stats: defence.stats,
        crit_chance: defence.base.crit_chance,
        crit_multiplier: defence.base.crit_multiplier,
        upgrade_cost: defence.upgrade_cost(),
    }
}
