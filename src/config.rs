//! Host configuration loaded from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "client/dist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("dist directory not found: {0}")]
    MissingDistDir(PathBuf),
    #[error("dist directory has no index.html: {0}")]
    MissingIndex(PathBuf),
}

/// Listener and static bundle settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    /// `PORT`
    pub port: u16,
    /// `TITANOS_DIST_DIR`: the built client bundle.
    pub dist_dir: PathBuf,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            dist_dir: std::env::var("TITANOS_DIST_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map_or_else(|| PathBuf::from(DEFAULT_DIST_DIR), PathBuf::from),
        }
    }

    /// Check that the bundle is in place before binding.
    ///
    /// # Errors
    ///
    /// Returns an error if `dist_dir` is missing or lacks `index.html`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dist_dir.is_dir() {
            return Err(ConfigError::MissingDistDir(self.dist_dir.clone()));
        }
        if !self.dist_dir.join("index.html").is_file() {
            return Err(ConfigError::MissingIndex(self.dist_dir.clone()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
