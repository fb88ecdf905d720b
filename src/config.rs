//! Configuration management
//!
//! Loads converter and display settings from environment variables. Every
//! setting has a default, so an empty environment yields a usable config.

use std::env;

use chrono::{FixedOffset, Offset, Utc};

use crate::constants::{
    DEFAULT_DISPLAY_UTC_OFFSET_MINUTES, DEFAULT_LOG_FILTER, MAX_DISPLAY_UTC_OFFSET_MINUTES,
};

/// How stored documents are interpreted on read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Missing fields and rule violations are errors
    #[default]
    Strict,
    /// Absent top-level fields take defaults; rule violations are only logged
    Permissive,
}

impl DecodeMode {
    /// Parse decode mode from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "permissive" => Some(Self::Permissive),
            _ => None,
        }
    }
}

/// Main configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub decode_mode: DecodeMode,
    /// Offset applied when rendering date strings
    pub display_utc_offset_minutes: i32,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decode_mode: DecodeMode::default(),
            display_utc_offset_minutes: DEFAULT_DISPLAY_UTC_OFFSET_MINUTES,
            rust_log: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let decode_mode = match lookup("POSTBOARD_DECODE_MODE") {
            Some(raw) => DecodeMode::from_str(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("POSTBOARD_DECODE_MODE".to_string()))?,
            None => DecodeMode::default(),
        };

        let display_utc_offset_minutes = match lookup("POSTBOARD_DISPLAY_UTC_OFFSET_MINUTES") {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|minutes| minutes.abs() <= MAX_DISPLAY_UTC_OFFSET_MINUTES)
                .ok_or_else(|| {
                    ConfigError::InvalidValue("POSTBOARD_DISPLAY_UTC_OFFSET_MINUTES".to_string())
                })?,
            None => DEFAULT_DISPLAY_UTC_OFFSET_MINUTES,
        };

        Ok(Self {
            decode_mode,
            display_utc_offset_minutes,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// Offset to render date strings in
    pub fn display_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.display_utc_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix())
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
