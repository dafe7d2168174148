// --- Playfield geometry (0–100 on both axes) ---
pub const SHIP_START_X: f64 = 50.0;
pub const SHIP_MIN_X: f64 = 5.0;
pub const SHIP_MAX_X: f64 = 95.0;
pub const SHIP_ROW: f64 = 75.0; // Only used for drawing; collisions use the catch band

pub const SPAWN_Y: f64 = -10.0;
pub const SPAWN_X_MIN: f64 = 5.0;
pub const SPAWN_X_SPAN: f64 = 90.0;

pub const ENTITY_EXIT_Y: f64 = 85.0;
pub const POWER_UP_EXIT_Y: f64 = 90.0;
pub const CATCH_BAND_TOP: f64 = 70.0;
pub const CATCH_BAND_BOTTOM: f64 = 85.0;
pub const CATCH_RADIUS: f64 = 10.0;

// --- Lasers ---
pub const LASER_SPAWN_Y: f64 = 70.0;
pub const LASER_SPEED: f64 = 5.0;
pub const LASER_HIT_RADIUS: f64 = 8.0;
pub const LASER_CAP: usize = 3;
pub const BOOSTED_LASER_CAP: usize = 5;

// --- Spawning & falling ---
pub const ENTITY_SPAWN_BASE: f64 = 0.02;
pub const ENTITY_SPAWN_PER_LEVEL: f64 = 0.005;
pub const POWER_UP_SPAWN_CHANCE: f64 = 0.005;
pub const FALL_SPEED_BASE: f64 = 1.5;
pub const FALL_SPEED_PER_LEVEL: f64 = 0.2;
pub const SLOW_MOTION_FACTOR: f64 = 0.5;

// --- Magnet ---
pub const MAGNET_BAND_TOP: f64 = 20.0;
pub const MAGNET_BAND_BOTTOM: f64 = 80.0;
pub const MAGNET_PULL: f64 = 0.15;

// --- Scoring ---
pub const STARTING_LIVES: u32 = 3;
pub const ZAP_BONUS: u32 = 15;
pub const COMBO_STEP: u32 = 5;
pub const COMBO_BONUS: u32 = 10;
pub const LEVEL_SCORE_STEP: u32 = 100;
pub const BOSS_SCORE_THRESHOLD: u32 = 300;
pub const BOSS_LEVEL_THRESHOLD: u32 = 3;
pub const BOSS_HEALTH: u32 = 100;

// --- Timing (one tick = 50 ms) ---
pub const TICK_MS: u64 = 50;
pub const MESSAGE_TICKS: u32 = 30; // 1.5 s
pub const EFFECT_TICKS: u32 = 100; // 5 s

// --- Particles ---
pub const PARTICLE_LIFE: u32 = 20;
pub const PARTICLE_SPEED: f64 = 2.0;
