use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use castle_core::commands::PlayerCommand;
use castle_core::config::SimConfig;
use castle_core::events::GameEvent;
use castle_core::state::GameStateSnapshot;
use castle_sim::SimulationEngine;

/// Play the castle defence simulation without a window.
///
/// Waves are started as soon as the field is clear. Between waves the
/// cheapest affordable upgrade is bought.
#[derive(Parser, Debug)]
#[command(name = "headless-runner")]
struct Args {
    /// JSON config file; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many waves have been cleared
    #[arg(long, default_value_t = 10)]
    waves: u32,

    /// Stop after this much simulated time
    #[arg(long, default_value_t = 600.0)]
    max_secs: f64,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::from_json_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut engine = SimulationEngine::try_new(config)?;
    info!(
        seed = engine.config().seed,
        waves = args.waves,
        max_secs = args.max_secs,
        "starting headless run"
    );

    let mut cleared = 0;
    let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();
    let mut snapshot = engine.snapshot();

    while !engine.is_game_over() && engine.time().elapsed_secs < args.max_secs {
        if engine.can_spawn_wave() {
            if cleared >= args.waves {
                break;
            }
            queue_cheapest_upgrade(&mut engine, &snapshot);
            engine.queue_command(PlayerCommand::SpawnWave);
        }

        snapshot = engine.tick();
        for event in &snapshot.events {
            *counts.entry(event_name(event)).or_default() += 1;
            if matches!(event, GameEvent::WaveCleared { .. }) {
                cleared += 1;
            }
        }
    }

    let outcome = if engine.is_game_over() {
        "castle fell"
    } else {
        "survived"
    };
    info!(
        outcome,
        waves_cleared = cleared,
        wave = engine.wave_number(),
        gold = engine.gold(),
        castle_hp = engine.castle().hp,
        secs = engine.time().elapsed_secs,
        ticks = engine.time().tick,
        "run finished"
    );
    for (name, count) in &counts {
        info!(event = *name, count = *count, "event total");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    }

    Ok(())
}

fn queue_cheapest_upgrade(engine: &mut SimulationEngine, snapshot: &GameStateSnapshot) {
    let cheapest = snapshot
        .slots
        .iter()
        .enumerate()
        .filter_map(|(slot, view)| view.as_ref().map(|v| (slot, v.upgrade_cost)))
        .filter(|(_, cost)| *cost <= engine.gold())
        .min_by_key(|(_, cost)| *cost);

    if let Some((slot, _)) = cheapest {
        engine.queue_command(PlayerCommand::Upgrade { slot });
    }
}

fn event_name(event: &GameEvent) -> &'static str {
    match event {
        GameEvent::WaveSpawned { .. } => "wave_spawned",
        GameEvent::EnemyKilled { .. } => "enemy_killed",
        GameEvent::GoldAwarded { .. } => "gold_awarded",
        GameEvent::WaveCleared { .. } => "wave_cleared",
        GameEvent::CastleDamaged { .. } => "castle_damaged",
        GameEvent::DefenceDestroyed { .. } => "defence_destroyed",
        GameEvent::DefencePurchased { .. } => "defence_purchased",
        GameEvent::DefenceUpgraded { .. } => "defence_upgraded",
        GameEvent::DefencePlaced { .. } => "defence_placed",
        GameEvent::DefenceWithdrawn { .. } => "defence_withdrawn",
        GameEvent::SlotsSwapped { .. } => "slots_swapped",
        GameEvent::DefenceRetyped { .. } => "defence_retyped",
        GameEvent::GameOver { .. } => "game_over",
        GameEvent::CommandRejected { .. } => "command_rejected",
    }
}
