//! Configuration module for errpage
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ERRPAGE_*)
//! 3. Explicit config file (`--config`)
//! 4. User config (<config_dir>/errpage/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{system_language, user_config_path, ConfigWarning};
pub use types::{Config, ErrorPageConfig, LogConfig, LogLevel};
