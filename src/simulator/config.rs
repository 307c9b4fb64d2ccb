//! Simulation configuration.

use crate::core::config::GameConfig;

/// Configuration for a batch of headless runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frames per run before the run is stopped as a timeout
    pub max_frames_per_run: u64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,

    /// Game tuning shared with the interactive game
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            // 10 minutes of play at ~60 FPS
            max_frames_per_run: 37_500,
            verbosity: 1,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    /// Small deterministic batch for quick balance checks.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            max_frames_per_run: 6_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
