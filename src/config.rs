//! Runtime configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SNAKE_TICK_MS` | 80 | Tick interval in milliseconds |
//! | `SNAKE_SEED` | random | Food placement seed |
//! | `SNAKE_HALT_ON_COLLISION` | off | `1`/`true` stops ticking on a collision |
//! | `SNAKE_LOG_PATH` | unset | Log file; logging is off when unset |
//! | `SNAKE_LOG_LEVEL` | info | `off`, `error`, `warn`, `info`, `debug`, `trace` |
//!
//! Missing or unparsable values fall back to the default.

use std::time::Duration;

use log::LevelFilter;

use crate::core::SessionOptions;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tick_ms: u64,
    pub seed: Option<u64>,
    pub halt_on_collision: bool,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS as u64,
            seed: None,
            halt_on_collision: false,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = lookup("SNAKE_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let seed = lookup("SNAKE_SEED").and_then(|s| s.trim().parse().ok());

        let halt_on_collision = lookup("SNAKE_HALT_ON_COLLISION")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.halt_on_collision);

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_level = lookup("SNAKE_LOG_LEVEL")
            .and_then(|s| s.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            tick_ms,
            seed,
            halt_on_collision,
            log_path,
            log_level,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            seed: self.seed,
            halt_on_collision: self.halt_on_collision,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
