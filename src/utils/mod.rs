//! Utility modules: file logging.

pub mod logging;
