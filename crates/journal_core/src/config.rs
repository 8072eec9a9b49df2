//! Runtime configuration for journal hosts.
//!
//! # Responsibility
//! - Collect logging and startup options in one typed value.
//! - Read overrides from `JOURNAL_*` environment variables.
//!
//! # Invariants
//! - `log_level` is always one of `trace|debug|info|warn|error`.
//! - `log_dir`, when set, is absolute.

use crate::logging::{default_log_level, normalize_level};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "JOURNAL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "JOURNAL_LOG_DIR";
pub const ENV_SEED_SAMPLE: &str = "JOURNAL_SEED_SAMPLE";

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
    /// Start with the sample chapters instead of an empty journal.
    pub seed_sample_chapters: bool,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_sample_chapters: true,
        }
    }
}

impl JournalConfig {
    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup(key)` for each `JOURNAL_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            let level = normalize_level(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL,
                value: raw,
            })?;
            config.log_level = level.to_string();
        }

        if let Some(raw) = lookup(ENV_LOG_DIR).filter(|value| !value.trim().is_empty()) {
            let path = PathBuf::from(raw.trim());
            if !path.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_LOG_DIR,
                    value: raw,
                });
            }
            config.log_dir = Some(path);
        }

        if let Some(raw) = lookup(ENV_SEED_SAMPLE) {
            config.seed_sample_chapters =
                parse_flag(&raw).ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_SEED_SAMPLE,
                    value: raw,
                })?;
        }

        Ok(config)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => write!(f, "invalid value for {key}: `{value}`"),
        }
    }
}

impl Error for ConfigError {}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
