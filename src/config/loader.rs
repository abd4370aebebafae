//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ErrpageError, ErrpageResult};
use crate::language_tag::LanguageTag;
use crate::util::fs::expand_home;

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, LogLevel};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ErrpageResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ErrpageError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(location) = config.error_page.location.take() {
        config.error_page.location = Some(expand_home(&location));
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit config file, the user config, or defaults.
///
/// An explicit file must exist; a missing user config silently means defaults.
pub fn load_or_default(explicit: Option<&Path>) -> ErrpageResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    if let Some(user_config) = user_config_path() {
        if user_config.is_file() {
            tracing::debug!(path = %user_config.display(), "loading user config");
            return load_with_warnings(&user_config);
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// `<config_dir>/errpage/config.toml`, if the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("errpage").join("config.toml"))
}

/// Apply environment variable overrides (ERRPAGE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

fn apply_env_overrides<F, W>(mut config: Config, lookup: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    // ERRPAGE_LOCATION
    if let Some(location) = lookup("ERRPAGE_LOCATION").filter(|s| !s.is_empty()) {
        config.error_page.location = Some(expand_home(Path::new(&location)));
    }

    // ERRPAGE_LANGUAGE
    if let Some(language) = lookup("ERRPAGE_LANGUAGE").filter(|s| !s.is_empty()) {
        config.error_page.language = Some(language);
    }

    // ERRPAGE_LOG
    if let Some(level) = lookup("ERRPAGE_LOG") {
        let validator = EnvVarValidator::new("ERRPAGE_LOG", &LogLevel::NAMES);
        config.log.level =
            validator.parse_with_writer(&level, LogLevel::parse, config.log.level, writer);
    }

    config
}

/// Language from the POSIX locale variables (`LC_ALL`, `LC_MESSAGES`, `LANG`)
pub fn system_language() -> Option<String> {
    system_language_from(|name| std::env::var(name).ok())
}

fn system_language_from<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
        .and_then(|value| LanguageTag::from_posix_locale(&value))
        .map(|tag| tag.to_string())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "error_page",
        "location",
        "language",
        "layout",
        "resources_dir",
        "html_dir",
        "log",
        "level",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
