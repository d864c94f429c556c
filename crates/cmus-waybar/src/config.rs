use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use cmus_status::{RenderOptions, DEFAULT_BAR_WIDTH};

use super::platform;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {}", .0.display(), .1)]
    Read(PathBuf, std::io::Error),
    #[error("Failed to parse config file {}: {}", .0.display(), .1)]
    Parse(PathBuf, toml::de::Error),
    #[error("progress_bar_width must be at least 1")]
    ZeroWidth,
    #[error("timeout_secs must be at least 1")]
    ZeroTimeout,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub cmus: CmusConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub progress_bar: bool,
    /// Same bound as `--progress-bar-width`.
    #[serde(default = "default_bar_width")]
    pub progress_bar_width: u16,
}

/// How to reach the running player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CmusConfig {
    /// Binary name or path of the remote control client.
    #[serde(default = "default_remote_bin")]
    pub remote_bin: String,
    #[serde(default = "default_query_args")]
    pub query_args: Vec<String>,
    /// Upper bound on how long the query may take.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            progress_bar: false,
            progress_bar_width: default_bar_width(),
        }
    }
}

impl Default for CmusConfig {
    fn default() -> Self {
        Self {
            remote_bin: default_remote_bin(),
            query_args: default_query_args(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_bar_width() -> u16 {
    DEFAULT_BAR_WIDTH as u16
}

fn default_remote_bin() -> String {
    "cmus-remote".to_string()
}

fn default_query_args() -> Vec<String> {
    vec!["-Q".to_string()]
}

fn default_timeout_secs() -> u64 {
    5
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = Self::config_path();
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };

        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::Read(config_path.clone(), e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse(_, err) => ConfigError::Parse(config_path, err),
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.progress_bar_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.cmus.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            progress_bar: self.display.progress_bar,
            bar_width: self.display.progress_bar_width as usize,
        }
    }
}
