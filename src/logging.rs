//! Logger setup for the terminal binary.
//!
//! The TUI owns stdout, so logs only ever go to a file.

use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::AppConfig;

/// Install a file logger if `TWENTY48_LOG_PATH` was set. Returns whether a
/// logger was installed.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = File::create(path).with_context(|| format!("creating log file {}", path))?;
    let log_config = ConfigBuilder::new()
        .set_target_level(config.log_level)
        .set_time_format_rfc3339()
        .build();

    WriteLogger::init(config.log_level, log_config, file).context("installing file logger")?;
    log::info!("logging to {} at {}", path, config.log_level);
    Ok(true)
}
