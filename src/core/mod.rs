//! Core game state and logic.

pub mod collision;
pub mod config;
pub mod constants;
pub mod game_logic;
pub mod game_state;
pub mod tick;

pub use config::GameConfig;
pub use game_logic::{process_input, GameInput};
pub use game_state::{FlyWarriorGame, ObjectKind, Phase, Warrior, WorldObject};
pub use tick::{step_frame, tick_game, TickEvent, TickResult};
