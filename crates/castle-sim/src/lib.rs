//! Simulation engine for the castle defence game.
//!
//! Owns the entity lists, runs the per-tick systems in a fixed order,
//! and produces `GameStateSnapshot`s for whatever renders the game.

pub mod engine;
pub mod resources;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use castle_core as core;
pub use engine::SimulationEngine;
