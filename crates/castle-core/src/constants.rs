//! Simulation constants and default tuning parameters.
//!
//! Most of these only seed `SimConfig::default()`; the simulation itself reads
//! the configuration so scenarios and tests can override any value.

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Screen layout ---

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Fraction of the screen height taken by the castle area.
pub const CASTLE_HEIGHT_FRACTION: f32 = 0.25;

/// Spawn strip height and horizontal inset.
pub const SPAWN_HEIGHT: f32 = 80.0;
pub const SPAWN_SIDE_MARGIN: f32 = 50.0;

pub const DEFAULT_SLOT_COUNT: usize = 5;
pub const SLOT_SIZE: f32 = 100.0;
pub const SLOT_MARGIN_X: f32 = 40.0;
/// Vertical stagger of the slots (outer slots sit lower).
pub const SLOT_Y_OFFSETS: [f32; 5] = [30.0, 15.0, 0.0, 15.0, 30.0];

// --- Enemies ---

pub const ENEMY_BASE_SPEED: f32 = 40.0;
/// Speed added per wave number.
pub const ENEMY_SPEED_PER_WAVE: f32 = 10.0;
/// Side of the enemy bounding box.
pub const ENEMY_SIZE: f32 = 40.0;
pub const ENEMY_MAX_HP: f32 = 30.0;
pub const ENEMY_ATTACK_RANGE: f32 = 50.0;
/// Damage per second one attacking enemy deals to its target.
pub const ENEMY_DAMAGE_PER_SECOND: f32 = 5.0;

// --- Waves ---

/// Enemies in wave N = WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_LEVEL * N.
pub const WAVE_BASE_ENEMIES: u32 = 1;
pub const WAVE_ENEMIES_PER_LEVEL: u32 = 2;

// --- Economy ---

pub const STARTING_GOLD: u32 = 200;
pub const GOLD_PER_KILL: u32 = 10;
pub const GOLD_PER_WAVE_CLEAR: u32 = 20;

// --- Castle ---

pub const CASTLE_MAX_HP: f32 = 100.0;

// --- Defence levelling ---

/// Damage gained per level above 1 (fraction of base).
pub const LEVEL_DAMAGE_GAIN: f32 = 0.3;
/// Range gained per level above 1.
pub const LEVEL_RANGE_GAIN: f32 = 0.1;
/// Cooldown lost per level above 1.
pub const LEVEL_COOLDOWN_REDUCTION: f32 = 0.07;
/// Shortest cooldown any level can reach (seconds).
pub const MIN_COOLDOWN_SECS: f32 = 0.15;
/// Projectile speed gained per level above 1.
pub const LEVEL_PROJECTILE_SPEED_GAIN: f32 = 0.1;

pub const DEFENCE_MAX_HP: f32 = 50.0;
pub const DEFENCE_CRIT_CHANCE: f32 = 0.20;
pub const DEFENCE_CRIT_MULTIPLIER: f32 = 2.0;

/// Impact radius of mage projectiles.
pub const MAGE_AREA_RADIUS: f32 = 60.0;

// --- Feedback ---

pub const DAMAGE_NUMBER_LIFETIME: f32 = 1.6;
/// Upward drift of damage numbers (units/second).
pub const DAMAGE_NUMBER_RISE_SPEED: f32 = 60.0;
pub const AREA_EFFECT_LIFETIME: f32 = 0.25;
