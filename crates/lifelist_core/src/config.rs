//! Runtime configuration: where the store and logs live.
//!
//! # Responsibility
//! - Resolve the data directory from an explicit override, the
//!   `LIFELIST_DATA_DIR` environment variable, or the platform data dir.
//! - Resolve the log level from an override, `LIFELIST_LOG_LEVEL`, or the
//!   build-mode default.
//!
//! # Invariants
//! - `discover` creates the data directory when it does not exist.
//! - The resolved log level is always one `init_logging` accepts.

use crate::logging::{default_log_level, normalize_level};
use directories::ProjectDirs;
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = "lifelist.sqlite3";
const LOG_DIR_NAME: &str = "logs";
pub const ENV_DATA_DIR: &str = "LIFELIST_DATA_DIR";
pub const ENV_LOG_LEVEL: &str = "LIFELIST_LOG_LEVEL";

#[derive(Debug)]
pub enum ConfigError {
    /// No override, no env var and no platform data directory.
    NoDataDir,
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDataDir => write!(f, "could not determine a data directory"),
            Self::CreateDir { path, source } => write!(
                f,
                "failed to create data directory `{}`: {source}",
                path.display()
            ),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    data_dir: PathBuf,
    log_level: &'static str,
}

impl AppConfig {
    /// Resolves configuration and makes sure the data directory exists.
    pub fn discover(
        data_dir_override: Option<PathBuf>,
        log_level_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let data_dir = resolve_data_dir(data_dir_override)?;
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).map_err(|source| ConfigError::CreateDir {
                path: data_dir.clone(),
                source,
            })?;
        }
        let log_level = resolve_log_level(log_level_override)?;
        Ok(Self {
            data_dir,
            log_level,
        })
    }

    /// Builds configuration for an already resolved directory, without
    /// touching the filesystem or environment.
    pub fn from_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            log_level: default_log_level(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }

    pub fn log_level(&self) -> &'static str {
        self.log_level
    }
}

fn resolve_data_dir(data_dir_override: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = data_dir_override {
        return Ok(dir);
    }
    if let Some(dir) = env::var_os(ENV_DATA_DIR).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("dev", "lifelist", "lifelist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(ConfigError::NoDataDir)
}

fn resolve_log_level(level_override: Option<&str>) -> Result<&'static str, ConfigError> {
    let from_env = env::var(ENV_LOG_LEVEL).ok();
    match level_override.or(from_env.as_deref()) {
        Some(level) => normalize_level(level).map_err(ConfigError::InvalidLogLevel),
        None => Ok(default_log_level()),
    }
}
