//! Shell configuration, read from an optional RON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use catalog_core::DEFAULT_PAGE_SIZE;
use catalog_engine::SourceSettings;
use catalog_logging::LogDestination;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "catalog.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("page_size must be greater than zero")]
    InvalidPageSize,
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size: u32,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: Option<u64>,
    pub log_destination: LogTarget,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout_ms: 10_000,
            request_timeout_ms: None,
            log_destination: LogTarget::File,
            log_level: "info".to_string(),
            log_file: PathBuf::from("./catalog.log"),
        }
    }
}

impl AppConfig {
    /// Loads `path`, or `catalog.ron` in the working directory when no path is
    /// given. A missing default file yields the defaults; a missing explicit
    /// file is an error. `base_url_override` wins over the file.
    pub fn load(
        path: Option<&Path>,
        base_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::read(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::read(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        if let Some(base_url) = base_url_override.filter(|url| !url.trim().is_empty()) {
            config.base_url = base_url;
        }
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        self.level_filter().map(|_| ())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn source_settings(&self) -> SourceSettings {
        SourceSettings {
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            ..SourceSettings::new(self.base_url.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("catalog.ron");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"(base_url: "https://movies.example.com", page_size: 25)"#);

        let config = AppConfig::load(Some(&path), None).unwrap();
        assert_eq!(config.base_url, "https://movies.example.com");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.request_timeout_ms, None);
        assert_eq!(config.log_destination, LogTarget::File);
    }

    #[test]
    fn env_override_wins() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"(base_url: "https://file.example.com")"#);

        let config =
            AppConfig::load(Some(&path), Some("https://env.example.com".to_string())).unwrap();
        assert_eq!(config.base_url, "https://env.example.com");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "(page_size: 0)");

        assert!(matches!(
            AppConfig::load(Some(&path), None),
            Err(ConfigError::InvalidPageSize)
        ));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"(log_level: "loud")"#);

        assert!(matches!(
            AppConfig::load(Some(&path), None),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.ron");
        assert!(matches!(
            AppConfig::load(Some(&missing), None),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn timeouts_flow_into_source_settings() {
        let config = AppConfig {
            request_timeout_ms: Some(1500),
            ..AppConfig::default()
        };
        let settings = config.source_settings();
        assert_eq!(settings.request_timeout, Some(Duration::from_millis(1500)));
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert_eq!(settings.base_url, "http://localhost:8080");
    }
}
