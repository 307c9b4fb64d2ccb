//! Tunable game parameters.
//!
//! Defaults come from [`crate::core::constants`]. A JSON file can override
//! any subset of fields; missing fields keep their defaults.

use super::constants::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// Every tunable the simulation reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f64,
    pub world_height: f64,
    pub ground_height: f64,

    pub warrior_x: f64,
    pub warrior_width: f64,
    pub warrior_height: f64,

    pub gravity: f64,
    pub jump_velocity: f64,

    pub initial_speed: f64,
    pub max_speed: f64,
    pub speed_increment: f64,

    pub score_per_frame: u64,
    pub score_per_coin: u64,

    pub spawn_interval_ms: u64,
    pub spawn_jitter_ms: u64,
    pub coin_chance: f64,
    pub object_ground_offset: f64,
    pub coin_max_lift: f64,
    pub coin_size: f64,
    pub bomb_size: f64,

    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            warrior_x: WARRIOR_X,
            warrior_width: WARRIOR_WIDTH,
            warrior_height: WARRIOR_HEIGHT,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            initial_speed: INITIAL_GAME_SPEED,
            max_speed: MAX_GAME_SPEED,
            speed_increment: GAME_SPEED_INCREMENT,

            score_per_frame: SCORE_PER_FRAME,
            score_per_coin: SCORE_PER_COIN,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_jitter_ms: SPAWN_JITTER_MS,
            coin_chance: COIN_CHANCE,
            object_ground_offset: OBJECT_GROUND_OFFSET,
            coin_max_lift: COIN_MAX_LIFT,
            coin_size: COIN_SIZE,
            bomb_size: BOMB_SIZE,

            frame_ms: FRAME_MS,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the top of the ground strip.
    pub fn ground_top(&self) -> f64 {
        self.world_height - self.ground_height
    }

    /// Y coordinate of the warrior's top edge when standing on the ground.
    pub fn warrior_rest_y(&self) -> f64 {
        self.ground_top() - self.warrior_height
    }

    /// Default config file location (`<config dir>/flywarrior/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "flywarrior").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults when no
    /// file exists there.
    pub fn load_default() -> io::Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values describe a playable world.
    pub fn validate(&self) -> io::Result<()> {
        let fail = |msg: &str| Err(io::Error::new(io::ErrorKind::InvalidData, msg.to_string()));

        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return fail("world dimensions must be positive");
        }
        if self.ground_height < 0.0 || self.ground_height >= self.world_height {
            return fail("ground height must be within the world height");
        }
        if self.warrior_width <= 0.0 || self.warrior_height <= 0.0 {
            return fail("warrior dimensions must be positive");
        }
        if self.warrior_rest_y() < 0.0 {
            return fail("warrior does not fit above the ground");
        }
        if self.gravity <= 0.0 {
            return fail("gravity must be positive");
        }
        if self.jump_velocity >= 0.0 {
            return fail("jump velocity must be negative (upward)");
        }
        if self.initial_speed <= 0.0 || self.initial_speed > self.max_speed {
            return fail("initial speed must be positive and not exceed max speed");
        }
        if self.speed_increment < 0.0 {
            return fail("speed increment must not be negative");
        }
        if !(0.0..=1.0).contains(&self.coin_chance) {
            return fail("coin chance must be between 0 and 1");
        }
        if self.coin_size <= 0.0 || self.bomb_size <= 0.0 {
            return fail("object sizes must be positive");
        }
        if self.coin_max_lift < 0.0 || self.object_ground_offset < 0.0 {
            return fail("object offsets must not be negative");
        }
        if self.frame_ms == 0 {
            return fail("frame length must be positive");
        }
        Ok(())
    }
}
