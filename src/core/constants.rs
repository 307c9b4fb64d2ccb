// World dimensions (world units, y grows downward)
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 400.0;
pub const GROUND_HEIGHT: f64 = 80.0;

// Warrior
pub const WARRIOR_X: f64 = 100.0;
pub const WARRIOR_WIDTH: f64 = 60.0;
pub const WARRIOR_HEIGHT: f64 = 80.0;

// Physics (per frame)
pub const GRAVITY: f64 = 0.8;
pub const JUMP_VELOCITY: f64 = -15.0;

// Scrolling speed (units per frame)
pub const INITIAL_GAME_SPEED: f64 = 3.0;
pub const MAX_GAME_SPEED: f64 = 6.0;
pub const GAME_SPEED_INCREMENT: f64 = 0.001;

// Scoring
pub const SCORE_PER_FRAME: u64 = 1;
pub const SCORE_PER_COIN: u64 = 10;

// Spawning
pub const SPAWN_INTERVAL_MS: u64 = 1500;
pub const SPAWN_JITTER_MS: u64 = 1000;
pub const COIN_CHANCE: f64 = 0.6;
/// Distance between the ground top and the lowest coin / every bomb.
pub const OBJECT_GROUND_OFFSET: f64 = 30.0;
/// Extra random lift applied to coins above `OBJECT_GROUND_OFFSET`.
pub const COIN_MAX_LIFT: f64 = 100.0;
pub const COIN_SIZE: f64 = 25.0;
pub const BOMB_SIZE: f64 = 30.0;

// Real-time frame rate
pub const FRAME_MS: u64 = 16; // ~60 FPS
/// Largest wall-clock delta fed to the fixed-step driver in one call.
pub const MAX_TICK_DT_MS: u64 = 100;

// Terminal loop
pub const INPUT_POLL_MS: u64 = 8;
