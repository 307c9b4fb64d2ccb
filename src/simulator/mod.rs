//! Headless simulator for balance checks.
//!
//! Plays many seeded runs with a simple autopilot to measure how long runs
//! last and how the coin/bomb mix plays out. The runner drives the same
//! frame logic the terminal game uses (src/core/tick.rs).

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
