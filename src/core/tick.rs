//! Fixed-step frame driver.
//!
//! The front end calls [`tick_game`] with the wall-clock time since its last
//! call. Whole frames are stepped from an accumulator and the events they
//! produce are returned in a [`TickResult`], so the presentation layer can
//! react without the game logic depending on any UI types.

use super::constants::MAX_TICK_DT_MS;
use super::game_logic::update_game;
use super::game_state::{FlyWarriorGame, ObjectKind};
use rand::Rng;

/// A single event produced by a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// The warrior touched down after a jump.
    Landed,
    /// A coin or bomb entered at the right edge.
    ObjectSpawned { kind: ObjectKind },
    /// The warrior picked up a coin.
    CoinCollected { coins: u64, message: String },
    /// The warrior hit a bomb; the run is over.
    BombHit {
        score: u64,
        coins: u64,
        message: String,
    },
}

/// Everything that happened during one [`tick_game`] call.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
    /// Number of whole frames stepped.
    pub frames: u32,
}

impl TickResult {
    pub fn changed(&self) -> bool {
        self.frames > 0
    }

    pub fn game_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::BombHit { .. }))
    }
}

/// Step exactly one frame regardless of elapsed time.
pub fn step_frame<R: Rng>(game: &mut FlyWarriorGame, rng: &mut R) -> Vec<TickEvent> {
    let mut events = Vec::new();
    update_game(game, rng, &mut events);
    events
}

/// Advance the game by `dt_ms` of wall-clock time.
///
/// `dt_ms` is clamped to [`MAX_TICK_DT_MS`] so a stalled terminal does not
/// fast-forward the run. Leftover time carries over to the next call.
pub fn tick_game<R: Rng>(game: &mut FlyWarriorGame, dt_ms: u64, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    if !game.is_playing() {
        return result;
    }

    let frame_ms = game.config.frame_ms;
    game.accumulated_time_ms += dt_ms.min(MAX_TICK_DT_MS);

    while game.accumulated_time_ms >= frame_ms {
        game.accumulated_time_ms -= frame_ms;
        update_game(game, rng, &mut result.events);
        result.frames += 1;

        if !game.is_playing() {
            game.accumulated_time_ms = 0;
            break;
        }
    }

    result
}
