//! Logging for the Orbit math crates.

mod macros;

pub use log::{Level, LevelFilter, debug, error, info, log, log_enabled, trace, warn};
