//! Headless run loop driving the real frame logic with the autopilot.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::game_logic::{process_input, start_game, GameInput};
use crate::core::game_state::{FlyWarriorGame, ObjectKind};
use crate::core::tick::{step_frame, TickEvent};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &Autopilot::default(), &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} frames, score {}, coins {}{}",
                run_idx + 1,
                config.num_runs,
                stats.frames,
                stats.score,
                stats.coins,
                if stats.timed_out { " (timed out)" } else { "" }
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.max_frames_per_run)
}

/// Play one run from the start screen until a bomb hit or the frame limit.
pub fn simulate_single_run<R: Rng>(
    config: &SimConfig,
    pilot: &Autopilot,
    rng: &mut R,
) -> RunStats {
    let mut game = FlyWarriorGame::new(config.game.clone());
    start_game(&mut game);

    let mut stats = RunStats::default();

    while game.is_playing() && game.frame_count < config.max_frames_per_run {
        if pilot.should_jump(&game) && process_input(&mut game, GameInput::Fly) {
            stats.jumps += 1;
        }

        for event in step_frame(&mut game, rng) {
            match event {
                TickEvent::ObjectSpawned {
                    kind: ObjectKind::Coin,
                } => stats.coins_spawned += 1,
                TickEvent::ObjectSpawned {
                    kind: ObjectKind::Bomb,
                } => stats.bombs_spawned += 1,
                TickEvent::Landed
                | TickEvent::CoinCollected { .. }
                | TickEvent::BombHit { .. } => {}
            }
        }
    }

    stats.frames = game.frame_count;
    stats.score = game.score;
    stats.coins = game.coins;
    stats.final_speed = game.game_speed;
    stats.timed_out = game.is_playing();
    stats
}
