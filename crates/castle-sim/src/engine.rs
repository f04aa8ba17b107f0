//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the world, the economy and the castle, processes
//! player commands, runs all systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use castle_core::commands::PlayerCommand;
use castle_core::config::SimConfig;
use castle_core::enums::{DefenceType, GamePhase};
use castle_core::error::{CommandError, ConfigError};
use castle_core::events::GameEvent;
use castle_core::layout::Layout;
use castle_core::state::GameStateSnapshot;
use castle_core::types::SimTime;

use crate::resources::{Castle, Economy};
use crate::systems;
use crate::world::World;
use crate::world_setup;

/// The simulation engine. Owns all game state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    economy: Economy,
    castle: Castle,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine. The config is trusted; use `try_new` for
    /// configuration that came from outside.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: world_setup::build_world(&config),
            economy: Economy::new(config.economy.starting_gold),
            castle: Castle::new(config.castle.max_hp),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Validate `config`, then create the engine.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    // ---- Commands ----

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply a command right away. On `Err` nothing changed.
    pub fn apply_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match self.handle_command(&command) {
            Ok(event) => {
                self.events.push(event);
                Ok(())
            }
            Err(err) => {
                warn!(?command, %err, "command rejected");
                Err(err)
            }
        }
    }

    pub fn spawn_wave(&mut self) -> Result<(), CommandError> {
        self.apply_command(PlayerCommand::SpawnWave)
    }

    pub fn upgrade(&mut self, slot: usize) -> Result<(), CommandError> {
        self.apply_command(PlayerCommand::Upgrade { slot })
    }

    pub fn buy(&mut self, defence_type: DefenceType) -> Result<(), CommandError> {
        self.apply_command(PlayerCommand::Buy { defence_type })
    }

    pub fn place(&mut self, defence_type: DefenceType, slot: usize) -> Result<(), CommandError> {
        self.apply_command(PlayerCommand::Place { defence_type, slot })
    }

    pub fn withdraw(&mut self, slot: usize) -> Result<(), CommandError> {
        self.apply_command(PlayerCommand::Withdraw { slot })
    }

    pub fn swap(&mut self, slot_a: usize, slot_b: usize) -> Result<(), CommandError> {
        self.apply_command(PlayerCommand::Swap { slot_a, slot_b })
    }

    pub fn cycle_type(&mut self, slot: usize) -> Result<(), CommandError> {
        self.apply_command(PlayerCommand::CycleType { slot })
    }

    /// Replace the layout and move slotted defences to the new slot centres.
    /// Defences in slots that no longer exist go back to the owned pool.
    pub fn set_layout(&mut self, layout: Layout) {
        let slot_count = layout.slots.len();
        if self.world.slots.len() > slot_count {
            let removed: Vec<_> = self.world.slots.drain(slot_count..).flatten().collect();
            self.world.owned.extend(removed);
        }
        self.world.slots.resize(slot_count, None);
        self.config.layout = layout;
        world_setup::sync_slot_positions(&mut self.world, &self.config);
    }

    // ---- Ticking ----

    /// Advance the simulation by one fixed tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.step(self.config.dt());
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Run one tick of `dt` seconds without building a snapshot.
    /// Queued commands are not processed here; `tick` does that.
    pub fn step(&mut self, dt: f32) {
        if self.phase != GamePhase::Active {
            return;
        }
        self.run_systems(dt);
        self.time.advance(dt);
    }

    /// Current visible state, including events not yet drained by `tick`.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(self.events.clone())
    }

    // ---- Accessors ----

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn gold(&self) -> u32 {
        self.economy.gold
    }

    pub fn wave_number(&self) -> u32 {
        self.economy.wave_number
    }

    pub fn castle(&self) -> &Castle {
        &self.castle
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// True when a new wave may be started.
    pub fn can_spawn_wave(&self) -> bool {
        self.phase == GamePhase::Active && systems::wave_spawner::can_spawn(&self.world)
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn economy_mut(&mut self) -> &mut Economy {
        &mut self.economy
    }

    #[cfg(test)]
    pub(crate) fn castle_mut(&mut self) -> &mut Castle {
        &mut self.castle
    }

    // ---- Internals ----

    fn build_snapshot(&self, events: Vec<GameEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.economy,
            &self.castle,
            &self.time,
            self.phase,
            events,
        )
    }

    /// Process all queued commands. Rejections become events.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply_command(command) {
                self.events.push(GameEvent::CommandRejected {
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: &PlayerCommand) -> Result<GameEvent, CommandError> {
        if self.phase == GamePhase::GameOver {
            return Err(CommandError::GameOver);
        }

        match *command {
            PlayerCommand::SpawnWave => {
                if !systems::wave_spawner::can_spawn(&self.world) {
                    return Err(CommandError::WaveInProgress);
                }
                Ok(systems::wave_spawner::spawn_wave(
                    &mut self.world,
                    &mut self.economy,
                    &self.config,
                ))
            }
            PlayerCommand::Upgrade { slot } => {
                systems::economy::upgrade(&mut self.world, &mut self.economy, slot)
            }
            PlayerCommand::Buy { defence_type } => systems::economy::buy(
                &mut self.world,
                &mut self.economy,
                &self.config,
                defence_type,
            ),
            PlayerCommand::Place { defence_type, slot } => {
                systems::slots::place(&mut self.world, &self.config, defence_type, slot)
            }
            PlayerCommand::Withdraw { slot } => systems::slots::withdraw(&mut self.world, slot),
            PlayerCommand::Swap { slot_a, slot_b } => {
                systems::slots::swap(&mut self.world, &self.config, slot_a, slot_b)
            }
            PlayerCommand::CycleType { slot } => {
                systems::slots::cycle_type(&mut self.world, &self.config, slot)
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let had_enemies = !self.world.enemies.is_empty();

        // 1. Enemy targeting, movement and attacks
        let castle_damage = systems::combat::run(
            &mut self.world,
            self.config.layout.castle_center(),
            self.config.enemy.damage_per_second,
            dt,
        );

        // 2. Castle damage + game over
        if castle_damage > 0.0 {
            let applied = self.castle.apply_damage(castle_damage);
            self.events.push(GameEvent::CastleDamaged {
                amount: applied,
                remaining: self.castle.hp,
            });
        }
        if self.castle.is_destroyed() {
            self.phase = GamePhase::GameOver;
            info!(wave = self.economy.wave_number, "castle destroyed, game over");
            self.events.push(GameEvent::GameOver {
                wave: self.economy.wave_number,
            });
            return;
        }

        // 3. Destroyed defences leave their slots
        systems::cleanup::prune_destroyed_defences(&mut self.world, &mut self.events);

        // 4. Defence fire
        systems::defence_fire::run(&mut self.world, &mut self.rng, dt);

        // 5. Projectile flight and hits
        let alive_before = self.world.live_enemy_count();
        systems::projectiles::run(&mut self.world, &self.config.effects, dt, &mut self.events);

        // 6. Feedback ageing
        systems::effects::run(&mut self.world, dt);

        // 7. Kill rewards
        let alive_after = self.world.live_enemy_count();
        systems::economy::reward_kills(
            &mut self.economy,
            alive_before,
            alive_after,
            self.config.economy.gold_per_kill,
            &mut self.events,
        );

        // 8. Cleanup
        systems::cleanup::run(&mut self.world);

        // 9. Wave-clear bonus
        systems::economy::reward_wave_clear(
            &mut self.economy,
            had_enemies,
            !self.world.enemies.is_empty(),
            self.config.economy.gold_per_wave_clear,
            &mut self.events,
        );
    }
}
