//! Environment-driven store configuration.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "STAFFING_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "STAFFING_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "STAFFING_LOG_DIR";
pub const DEFAULT_DB_PATH: &str = "staffing.sqlite3";

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// `None` leaves file logging disabled.
    pub log_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Reads and validates `STAFFING_*` variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let db_path = non_empty_var(DB_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let log_level = match non_empty_var(LOG_LEVEL_VAR) {
            Some(value) => normalize_level(&value).map_err(|_| ConfigError::InvalidLogLevel(value))?,
            None => default_log_level(),
        };

        let log_dir = match non_empty_var(LOG_DIR_VAR) {
            Some(value) => Some(
                normalize_log_dir(&value).map_err(|_| ConfigError::RelativeLogDir(value))?,
            ),
            None => None,
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }

    /// Replaces the database path, e.g. with a command-line override.
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Errors that can occur during configuration loading.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLogLevel(value) => write!(
                f,
                "{LOG_LEVEL_VAR} must be one of trace|debug|info|warn|error (got {value})"
            ),
            Self::RelativeLogDir(value) => {
                write!(f, "{LOG_DIR_VAR} must be an absolute path (got {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
