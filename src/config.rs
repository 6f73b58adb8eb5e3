//! Application configuration
//!
//! Settings come from an optional TOML file; every field has a default so an empty
//! file (or no file) is valid. Command-line flags are applied on top by the binary.
//!
//! ```toml
//! view = "list"
//!
//! [queue]
//! capacity = 8
//! log_order = "newest-first"
//!
//! [list]
//! kind = "dll"
//!
//! [animation]
//! step_millis = 700
//!
//! [logging]
//! filter = "dsviz=debug"
//! file = "dsviz.log"
//! ```

use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_QUEUE_CAPACITY, DEFAULT_STEP_MILLIS};
use crate::model::list::ListKind;
use crate::oplog::LogOrder;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Which visualizer is shown first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Queue,
    List,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub view: StartView,
    pub queue: QueueConfig,
    pub list: ListConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    pub capacity: NonZeroUsize,
    pub log_order: LogOrder,
}

impl Default for QueueConfig {
    fn default() -> Self {
        QueueConfig {
            capacity: NonZeroUsize::new(DEFAULT_QUEUE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            log_order: LogOrder::NewestFirst,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub kind: ListKind,
    pub log_order: LogOrder,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            kind: ListKind::Sll,
            log_order: LogOrder::NewestFirst,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub step_millis: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            step_millis: DEFAULT_STEP_MILLIS,
        }
    }
}

impl AnimationConfig {
    pub fn step_duration(&self) -> Duration {
        Duration::from_millis(self.step_millis)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
    /// Log destination; logging is off when unset because the TUI owns the terminal
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: DEFAULT_LOG_FILTER.to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.step_millis == 0 {
            return Err(ConfigError::Invalid {
                field: "animation.step_millis",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config.queue.capacity.get(), DEFAULT_QUEUE_CAPACITY);
        assert_eq!(config.list.kind, ListKind::Sll);
        assert_eq!(config.view, StartView::Queue);
        assert_eq!(
            config.animation.step_duration(),
            Duration::from_millis(DEFAULT_STEP_MILLIS)
        );
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_parses_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            view = "list"

            [queue]
            capacity = 3
            log_order = "oldest-first"

            [list]
            kind = "dll"
            "#,
        )
        .unwrap();

        assert_eq!(config.view, StartView::List);
        assert_eq!(config.queue.capacity.get(), 3);
        assert_eq!(config.queue.log_order, LogOrder::OldestFirst);
        assert_eq!(config.list.kind, ListKind::Dll);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = AppConfig::from_toml_str("[queue]\ncapacity = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_zero_step() {
        let err = AppConfig::from_toml_str("[animation]\nstep_millis = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "animation.step_millis",
                ..
            }
        ));
    }
}
