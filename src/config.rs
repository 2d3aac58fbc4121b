use reqwest::Url;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid prediction endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Settings of the native prediction client
#[derive(Debug, Clone)]
pub struct Settings {
    /// Full URL requests are POSTed to
    pub endpoint: Url,
    /// Upper bound for one prediction request
    pub timeout: Duration,
}

impl Settings {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };

        let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            endpoint: url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// What happened when looking for a `.env` file
#[derive(Debug)]
pub enum EnvFile {
    Loaded(PathBuf),
    Missing,
    Failed(dotenvy::Error),
}

impl EnvFile {
    fn from_result(result: Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => EnvFile::Loaded(path),
            Err(e) if e.not_found() => EnvFile::Missing,
            Err(e) => EnvFile::Failed(e),
        }
    }

    /// Reports the outcome. Call once the subscriber is installed.
    pub fn log(&self) {
        match self {
            EnvFile::Loaded(path) => tracing::debug!("Loaded environment from {}", path.display()),
            EnvFile::Missing => tracing::trace!("No .env file found"),
            EnvFile::Failed(e) => tracing::warn!("Failed to load .env file: {}", e),
        }
    }
}

/// Load `.env` into the process environment so `RUST_LOG` and clap's `env`
/// fallbacks see it. Runs before logging is set up, so nothing is logged here.
pub fn load_environment() -> EnvFile {
    EnvFile::from_result(dotenvy::dotenv())
}

/// Same as [`load_environment`] for an explicit file
pub fn load_environment_from(path: &Path) -> EnvFile {
    EnvFile::from_result(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}
