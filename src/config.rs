//! Runtime configuration, read from environment variables.
//!
//! - `TWENTY48_SEED`: RNG seed (u64). Defaults to a clock-derived value.
//! - `TWENTY48_LOG_PATH`: write logs to this file. Logging is off when unset.
//! - `TWENTY48_LOG_LEVEL`: `error|warn|info|debug|trace` (default `info`).
//! - `TWENTY48_SUMMARY`: `text` (default), `json` or `off`.
//!
//! Unparseable values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

/// How the session summary is printed on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Text,
    Json,
    Off,
}

impl SummaryFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(SummaryFormat::Text),
            "json" => Some(SummaryFormat::Json),
            "off" | "none" | "0" => Some(SummaryFormat::Off),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub seed: u64,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub summary: SummaryFormat,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (tests pass a map instead of the
    /// process environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TWENTY48_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("TWENTY48_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("TWENTY48_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        let summary = lookup("TWENTY48_SUMMARY")
            .and_then(|s| SummaryFormat::from_str(&s))
            .unwrap_or(SummaryFormat::Text);

        Self {
            seed,
            log_path,
            log_level,
            summary,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
