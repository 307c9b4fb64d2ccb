//! Fly Warrior - terminal side-scroller library.
//!
//! This module exposes the game logic, renderer, and simulator for the
//! binaries and for testing.

pub mod build_info;
pub mod core;
pub mod input;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use crate::core::{FlyWarriorGame, GameConfig, GameInput, Phase};
