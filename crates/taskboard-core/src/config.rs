//! Board Configuration
//!
//! Where the snapshot lives and how often it is re-read.

use log::LevelFilter;

/// Snapshot location, relative to the page.
pub const DEFAULT_SNAPSHOT_PATH: &str = "tasks.json";
/// Refresh period in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 30_000;
/// Query parameter carrying the cache-busting timestamp.
pub const CACHE_BUST_PARAM: &str = "t";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub snapshot_path: String,
    pub poll_interval_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            snapshot_path: DEFAULT_SNAPSHOT_PATH.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl BoardConfig {
    /// Snapshot URL with the timestamp appended so no cache layer answers.
    pub fn snapshot_url(&self, timestamp_ms: u64) -> String {
        let sep = if self.snapshot_path.contains('?') { '&' } else { '?' };
        format!("{}{}{}={}", self.snapshot_path, sep, CACHE_BUST_PARAM, timestamp_ms)
    }
}
