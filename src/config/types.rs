//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ErrpageResult;
use crate::error_page::ResourceLayout;

use super::loader::{self, ConfigWarning};

/// Default error page lookup inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPageConfig {
    /// Base error page location; `~` is expanded on load
    #[serde(default)]
    pub location: Option<PathBuf>,

    /// Language tag used when none is given on the command line
    #[serde(default)]
    pub language: Option<String>,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const NAMES: [&'static str; 5] = ["error", "warn", "info", "debug", "trace"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }

    /// Level for a `-v` count on top of `base` (each `-v` is one step louder)
    pub fn raised_by(self, steps: u8) -> Self {
        let all = [Self::Error, Self::Warn, Self::Info, Self::Debug, Self::Trace];
        let idx = (self as usize + steps as usize).min(all.len() - 1);
        all[idx]
    }

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Full errpage configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub error_page: ErrorPageConfig,

    #[serde(default)]
    pub layout: ResourceLayout,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ErrpageResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ErrpageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the user config, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> ErrpageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (ERRPAGE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
