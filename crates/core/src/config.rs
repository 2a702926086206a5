//! Game configuration
//!
//! Everything is optional: defaults give a standard game, and the
//! `BLOCKFALL_*` environment variables override individual values.

use crate::types::START_INTERVAL_MS;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for piece and column selection
    pub seed: u32,
    /// Gravity interval at score 0
    pub start_interval_ms: u32,
    /// JSON-lines event log destination
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            start_interval_ms: START_INTERVAL_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `BLOCKFALL_SEED`
    /// - `BLOCKFALL_START_INTERVAL_MS` (must be non-zero)
    /// - `BLOCKFALL_LOG_PATH` (blank means no log)
    ///
    /// Values that do not parse fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let start_interval_ms = lookup("BLOCKFALL_START_INTERVAL_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.start_interval_ms);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            start_interval_ms,
            log_path,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}
