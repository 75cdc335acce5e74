//! Application configuration loaded from `realodex.toml`.
//!
//! Every key is optional, and a missing file means all defaults. Command-line
//! flags are applied on top by the CLI.

use crate::logging::default_log_level;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "realodex.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// SQLite data file; `:memory:` keeps contacts for this session only.
    pub data_file: PathBuf,
    /// Directory for rotated log files.
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/realodex.db"),
            log_dir: PathBuf::from("logs"),
            log_level: default_log_level().to_string(),
        }
    }
}

impl AppConfig {
    /// Whether contacts should live in memory only.
    pub fn is_in_memory(&self) -> bool {
        self.data_file.as_os_str() == ":memory:"
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config at {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config at {}: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Loads `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError};
    use std::path::PathBuf;

    #[test]
    fn empty_document_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config: AppConfig = toml::from_str("log_level = \"warn\"").unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.data_file, PathBuf::from("data/realodex.db"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<AppConfig>("data_fiel = \"x.db\"").is_err());
    }

    #[test]
    fn in_memory_marker() {
        let config = AppConfig {
            data_file: PathBuf::from(":memory:"),
            ..AppConfig::default()
        };
        assert!(config.is_in_memory());
        assert!(!AppConfig::default().is_in_memory());
    }

    #[test]
    fn parse_error_names_the_file() {
        let err = ConfigError::Parse {
            path: PathBuf::from("realodex.toml"),
            source: toml::from_str::<AppConfig>("log_level = 3").unwrap_err(),
        };
        assert!(err.to_string().contains("realodex.toml"));
    }
}
