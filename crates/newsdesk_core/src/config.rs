//! Process configuration read from the environment.
//!
//! | Variable             | Meaning                              | Default          |
//! |----------------------|--------------------------------------|------------------|
//! | `NEWSDESK_DB_PATH`   | SQLite database file                 | in-memory        |
//! | `NEWSDESK_LOG_LEVEL` | trace, debug, info, warn or error    | build-mode level |
//! | `NEWSDESK_LOG_DIR`   | absolute directory for rolling logs  | logging disabled |
//! | `NEWSDESK_PAGE_SIZE` | default page size for list/search    | 10               |
//!
//! Blank values count as unset.

use crate::logging::default_log_level;
use crate::repo::page::DEFAULT_PAGE_LIMIT;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "NEWSDESK_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "NEWSDESK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "NEWSDESK_LOG_DIR";
pub const ENV_PAGE_SIZE: &str = "NEWSDESK_PAGE_SIZE";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPageSize(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPageSize(raw) => write!(
                f,
                "{ENV_PAGE_SIZE} must be a positive integer, got `{raw}`"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Runtime settings for a newsdesk process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsdeskConfig {
    /// `None` selects an in-memory database.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// `None` leaves file logging off.
    pub log_dir: Option<PathBuf>,
    pub default_page_size: u32,
}

impl Default for NewsdeskConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
            default_page_size: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl NewsdeskConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let default_page_size = match get(ENV_PAGE_SIZE) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => return Err(ConfigError::InvalidPageSize(raw)),
            },
            None => defaults.default_page_size,
        };

        Ok(Self {
            db_path: get(ENV_DB_PATH).map(PathBuf::from),
            log_level: get(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: get(ENV_LOG_DIR).map(PathBuf::from),
            default_page_size,
        })
    }
}
