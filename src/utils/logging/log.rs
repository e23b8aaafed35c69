//! Roster loading log lines
//!
//! Every roster read reports where it started, how many persons it produced
//! and how long it took, so a slow or empty backend export shows up in the
//! `info` output of the binary.

use std::path::Path;
use std::time::Duration;

/// Announce a roster read from `path`
pub fn log_roster_read_start(mode: &str, path: &Path) {
    log::info!("Reading roster ({mode}) from {}", path.display());
}

/// Report a finished roster read
pub fn log_roster_read_complete(path: &Path, persons: usize, elapsed: Duration) {
    log::info!("Read {persons} persons from {} in {elapsed:?}", path.display());
}

/// Warn about a roster file that parsed but lists nobody
pub fn log_empty_roster(path: &Path) {
    log::warn!("Roster file holds no persons: {}", path.display());
}
