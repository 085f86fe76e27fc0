//! Environment-derived configuration for the personnel store.
//!
//! # Responsibility
//! - Resolve the database endpoint and logging options from the process
//!   environment, with defaults for anything unset.
//!
//! # Invariants
//! - The database path is the single configurable backend endpoint; no
//!   auth, TLS, or pooling knobs exist.

use std::env;
use std::path::PathBuf;

use crate::logging::default_log_level;

pub const ENV_DB_PATH: &str = "SALESBOOK_DB";
pub const ENV_LOG_DIR: &str = "SALESBOOK_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "SALESBOOK_LOG_LEVEL";

const DEFAULT_DB_FILE: &str = "salesbook.db";

/// Store configuration resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database file path.
    pub db_path: PathBuf,
    /// Directory for rolling log files; `None` leaves file logging off.
    pub log_dir: Option<PathBuf>,
    /// Level passed to `init_logging` when `log_dir` is set.
    pub log_level: String,
}

impl StoreConfig {
    /// Reads configuration from environment variables, falling back to
    /// defaults for unset or blank values.
    pub fn from_env() -> Self {
        Self {
            db_path: optional_env(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE)),
            log_dir: optional_env(ENV_LOG_DIR).map(PathBuf::from),
            log_level: optional_env(ENV_LOG_LEVEL)
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}
