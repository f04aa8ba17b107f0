//! Gold flow: kill rewards, wave-clear bonuses, purchases and upgrades.

use tracing::info;

use castle_core::config::SimConfig;
use castle_core::enums::{DefenceType, GoldReason};
use castle_core::error::CommandError;
use castle_core::events::GameEvent;
use glam::Vec2;

use crate::resources::Economy;
use crate::world::World;
use crate::world_setup;

/// Pay `gold_per_kill` for every enemy that died between the two counts.
pub fn reward_kills(
    economy: &mut Economy,
    alive_before: usize,
    alive_after: usize,
    gold_per_kill: u32,
    events: &mut Vec<GameEvent>,
) {
    let kills = alive_before.saturating_sub(alive_after) as u32;
    if kills == 0 {
        return;
    }
    let amount = kills.saturating_mul(gold_per_kill);
    economy.credit(amount);
    events.push(GameEvent::GoldAwarded {
        amount,
        reason: GoldReason::Kills,
    });
}

/// Wave-clear bonus, paid once when the enemy list goes from non-empty to empty.
pub fn reward_wave_clear(
    economy: &mut Economy,
    had_enemies: bool,
    has_enemies: bool,
    gold_per_wave_clear: u32,
    events: &mut Vec<GameEvent>,
) {
    if !had_enemies || has_enemies {
        return;
    }
    let wave = economy.wave_number;
    let bonus = gold_per_wave_clear.saturating_mul(wave.max(1));
    economy.credit(bonus);
    info!(wave, bonus, gold = economy.gold, "wave cleared");
    events.push(GameEvent::WaveCleared { wave, bonus });
    events.push(GameEvent::GoldAwarded {
        amount: bonus,
        reason: GoldReason::WaveClear,
    });
}

/// Buy a level-1 defence into the owned pool.
pub fn buy(
    world: &mut World,
    economy: &mut Economy,
    config: &SimConfig,
    kind: DefenceType,
) -> Result<GameEvent, CommandError> {
    let cost = config.defences.get(kind).shop_cost;
    economy.try_spend(cost)?;
    world
        .owned
        .push(world_setup::make_defence(config, kind, Vec2::ZERO));
    info!(defence = %kind, cost, gold = economy.gold, "defence purchased");
    Ok(GameEvent::DefencePurchased {
        defence_type: kind,
        cost,
    })
}

/// Upgrade the defence in `slot` for `base_cost * level` gold.
pub fn upgrade(
    world: &mut World,
    economy: &mut Economy,
    slot: usize,
) -> Result<GameEvent, CommandError> {
    let defence = world
        .slots
        .get_mut(slot)
        .ok_or(CommandError::InvalidSlot(slot))?
        .as_mut()
        .ok_or(CommandError::EmptySlot(slot))?;

    let cost = defence.upgrade_cost();
    economy.try_spend(cost)?;
    defence.upgrade();
    info!(
        slot,
        defence = %defence.kind,
        level = defence.level,
        cost,
        gold = economy.gold,
        "defence upgraded"
    );
    Ok(GameEvent::DefenceUpgraded {
        slot,
        defence_type: defence.kind,
        level: defence.level,
        cost,
    })
}
