//! Logging utilities
//!
//! Roster loading log lines and logger initialisation.

pub mod log;

pub use self::log::{log_empty_roster, log_roster_read_complete, log_roster_read_start};

/// Initialise `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
