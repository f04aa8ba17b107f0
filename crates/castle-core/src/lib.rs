//! Core types and definitions for the castle defence simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, commands, state snapshots, events, configuration
//! and constants. It has no dependency on any renderer or runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod layout;
pub mod state;
pub mod types;
