use castle_core::commands::PlayerCommand;
use castle_core::config::SimConfig;
use castle_core::enums::*;
use castle_core::error::{CommandError, ConfigError};
use castle_core::events::GameEvent;
use castle_sim::SimulationEngine;

fn undefended() -> SimConfig {
    SimConfig {
        starting_loadout: Vec::new(),
        ..Default::default()
    }
}

#[test]
fn test_undefended_castle_falls() {
    let mut engine = SimulationEngine::new(undefended());
    engine.spawn_wave().unwrap();

    let mut last_hp = engine.castle().hp;
    let mut game_over_events = 0;
    for _ in 0..3600 {
        let snapshot = engine.tick();
        assert!(snapshot.castle.hp <= last_hp, "castle never heals");
        last_hp = snapshot.castle.hp;
        game_over_events += snapshot
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { wave: 1 }))
            .count();
        if engine.is_game_over() {
            break;
        }
    }

    assert!(engine.is_game_over(), "three enemies should break an empty castle");
    assert_eq!(engine.castle().hp, 0.0);
    assert_eq!(game_over_events, 1);

    let frozen = engine.time();
    for _ in 0..60 {
        let snapshot = engine.tick();
        assert_eq!(snapshot.phase, GamePhase::GameOver);
        assert_eq!(snapshot.castle.hp, 0.0);
    }
    assert_eq!(engine.time(), frozen);
    assert_eq!(engine.buy(DefenceType::Archer), Err(CommandError::GameOver));
}

#[test]
fn test_enemies_reach_attack_range_of_castle() {
    let mut engine = SimulationEngine::new(undefended());
    engine.spawn_wave().unwrap();
    let castle = engine.config().layout.castle_center();
    let range = engine.config().enemy.attack_range;

    for _ in 0..1200 {
        engine.tick();
    }

    for enemy in &engine.world().enemies {
        assert_eq!(enemy.state, EnemyState::Attacking);
        assert_eq!(enemy.target, AttackTarget::Castle);
        assert!(enemy.position.distance(castle) <= range + 1e-3);
    }
}

#[test]
fn test_default_defences_hold_first_wave() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.spawn_wave().unwrap();

    let mut cleared = false;
    for _ in 0..3600 {
        let snapshot = engine.tick();
        if snapshot
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::WaveCleared { wave: 1, bonus: 20 }))
        {
            cleared = true;
            break;
        }
    }

    assert!(cleared);
    assert!(engine.castle().hp > 0.0);
    assert_eq!(engine.gold(), 200 + 3 * 10 + 20);
    assert!(engine.can_spawn_wave());
}

#[test]
fn test_upgrade_cost_doubles_with_level() {
    let mut engine = SimulationEngine::new(SimConfig::default());

    engine.upgrade(0).unwrap();
    assert_eq!(engine.gold(), 170);
    engine.upgrade(0).unwrap();
    assert_eq!(engine.gold(), 110);

    let view = engine.snapshot().slots[0].clone().unwrap();
    assert_eq!(view.level, 3);
    assert_eq!(view.upgrade_cost, 90);
    assert!((view.stats.damage - 12.8).abs() < 1e-4);
}

#[test]
fn test_spending_never_overdraws() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut rejections = 0;
    for _ in 0..20 {
        let before = engine.gold();
        match engine.buy(DefenceType::Cannon) {
            Ok(()) => assert_eq!(engine.gold(), before - 80),
            Err(CommandError::InsufficientGold { needed, available }) => {
                assert_eq!(needed, 80);
                assert_eq!(available, before);
                assert_eq!(engine.gold(), before);
                rejections += 1;
            }
            Err(other) => panic!("unexpected rejection: {other}"),
        }
    }
    assert_eq!(engine.world().owned.len(), 2);
    assert_eq!(rejections, 18);
    assert_eq!(engine.gold(), 40);
}

#[test]
fn test_snapshot_after_spawn() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::SpawnWave);
    let snapshot = engine.tick();

    assert_eq!(snapshot.wave_number, 1);
    assert_eq!(snapshot.enemies.len(), 3);
    assert!(!snapshot.can_spawn_wave);
    assert_eq!(snapshot.next_wave_enemy_count, 5);
    assert_eq!(snapshot.slots.len(), 5);
    assert!(snapshot.events.contains(&GameEvent::WaveSpawned {
        wave: 1,
        enemy_count: 3,
    }));

    // Events are handed out once.
    let next = engine.tick();
    assert!(!next.events.iter().any(|e| matches!(e, GameEvent::WaveSpawned { .. })));
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "seed": 9,
        "economy": { "starting_gold": 500 },
        "starting_loadout": ["Cannon", null, "Mage"]
    }"#;
    let config = SimConfig::from_json_str(json).unwrap();
    let engine = SimulationEngine::try_new(config).unwrap();

    assert_eq!(engine.gold(), 500);
    assert_eq!(engine.world().slots.len(), 5);
    assert_eq!(engine.world().defence(0).unwrap().kind, DefenceType::Cannon);
    assert!(engine.world().defence(1).is_none());
    assert_eq!(engine.world().defence(2).unwrap().kind, DefenceType::Mage);
    assert!(engine.world().defence(3).is_none());
}

#[test]
fn test_invalid_config_rejected() {
    let config = SimConfig {
        tick_rate: 0,
        ..Default::default()
    };
    assert!(matches!(
        SimulationEngine::try_new(config),
        Err(ConfigError::Invalid(_))
    ));

    assert!(matches!(
        SimConfig::from_json_str("{ not json"),
        Err(ConfigError::Parse(_))
    ));
}
