//! File logging for the terminal binary.
//!
//! The game owns stdout (alternate screen, raw mode), so log records go to the
//! file named by `SNAKE_LOG_PATH`. Without it no logger is installed and the
//! `log` macros are no-ops.

use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::GameConfig;

/// Install the global logger. Returns whether one was installed.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = File::create(path).with_context(|| format!("create log file {path}"))?;
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(log::LevelFilter::Error)
        .build();

    WriteLogger::init(config.log_level, log_config, file).context("install logger")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_means_no_logger() {
        let cfg = GameConfig::default();
        assert!(!init(&cfg).unwrap());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let cfg = GameConfig {
            log_path: Some("/nonexistent-dir/snake.log".to_string()),
            ..GameConfig::default()
        };
        let err = init(&cfg).unwrap_err();
        assert!(err.to_string().contains("create log file"));
    }
}
