//! Slot management: placing, withdrawing, swapping and re-typing defences.
//!
//! None of these touch gold. Each either succeeds completely or leaves the
//! world unchanged.

use tracing::info;

use castle_core::config::SimConfig;
use castle_core::enums::DefenceType;
use castle_core::error::CommandError;
use castle_core::events::GameEvent;

use crate::world::World;

/// Move the first owned defence of `kind` into the empty `slot`.
pub fn place(
    world: &mut World,
    config: &SimConfig,
    kind: DefenceType,
    slot: usize,
) -> Result<GameEvent, CommandError> {
    let center = config
        .layout
        .slot_center(slot)
        .ok_or(CommandError::InvalidSlot(slot))?;
    match world.slots.get(slot) {
        None => return Err(CommandError::InvalidSlot(slot)),
        Some(Some(_)) => return Err(CommandError::SlotOccupied(slot)),
        Some(None) => {}
    }
    let index = world
        .owned
        .iter()
        .position(|d| d.kind == kind)
        .ok_or(CommandError::NoOwnedDefence(kind))?;

    let mut defence = world.owned.remove(index);
    defence.position = center;
    defence.time_since_last_shot = 0.0;
    info!(slot, defence = %kind, level = defence.level, "defence placed");
    world.slots[slot] = Some(defence);
    Ok(GameEvent::DefencePlaced {
        slot,
        defence_type: kind,
    })
}

/// Move the defence in `slot` to the owned pool, keeping level and hp.
pub fn withdraw(world: &mut World, slot: usize) -> Result<GameEvent, CommandError> {
    let defence = world
        .slots
        .get_mut(slot)
        .ok_or(CommandError::InvalidSlot(slot))?
        .take()
        .ok_or(CommandError::EmptySlot(slot))?;

    let kind = defence.kind;
    info!(slot, defence = %kind, level = defence.level, "defence withdrawn");
    world.owned.push(defence);
    Ok(GameEvent::DefenceWithdrawn {
        slot,
        defence_type: kind,
    })
}

/// Exchange the contents of two slots. Either may be empty.
pub fn swap(
    world: &mut World,
    config: &SimConfig,
    slot_a: usize,
    slot_b: usize,
) -> Result<GameEvent, CommandError> {
    let len = world.slots.len();
    for slot in [slot_a, slot_b] {
        if slot >= len || config.layout.slot_center(slot).is_none() {
            return Err(CommandError::InvalidSlot(slot));
        }
    }

    world.slots.swap(slot_a, slot_b);
    crate::world_setup::sync_slot_positions(world, config);
    info!(slot_a, slot_b, "slots swapped");
    Ok(GameEvent::SlotsSwapped { slot_a, slot_b })
}

/// Switch the defence in `slot` to the next type, keeping its level.
pub fn cycle_type(
    world: &mut World,
    config: &SimConfig,
    slot: usize,
) -> Result<GameEvent, CommandError> {
    let defence = world
        .slots
        .get_mut(slot)
        .ok_or(CommandError::InvalidSlot(slot))?
        .as_mut()
        .ok_or(CommandError::EmptySlot(slot))?;

    let kind = defence.kind.next();
    defence.retype(kind, *config.defences.get(kind));
    info!(slot, defence = %kind, level = defence.level, "defence retyped");
    Ok(GameEvent::DefenceRetyped {
        slot,
        defence_type: kind,
    })
}
