//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; everything lives in the world and the engine.

pub mod cleanup;
pub mod combat;
pub mod defence_fire;
pub mod economy;
pub mod effects;
pub mod projectiles;
pub mod slots;
pub mod snapshot;
pub mod wave_spawner;
