//! Tests for the config module

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use super::types::*;
use crate::error::ErrpageError;
use crate::error_page::ResourceLayout;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.error_page.location, None);
    assert_eq!(config.error_page.language, None);
    assert_eq!(config.layout, ResourceLayout::default());
    assert_eq!(config.layout.resources_dir, "resources");
    assert_eq!(config.layout.html_dir, "html");
    assert_eq!(config.log.level, LogLevel::Warn);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[error_page]
location = "/usr/share/errpage/err.html"
language = "en-GB"

[layout]
resources_dir = "res"
html_dir = "pages"

[log]
level = "debug"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(
        config.error_page.location,
        Some(PathBuf::from("/usr/share/errpage/err.html"))
    );
    assert_eq!(config.error_page.language.as_deref(), Some("en-GB"));
    assert_eq!(config.layout.resources_dir, "res");
    assert_eq!(config.layout.html_dir, "pages");
    assert_eq!(config.log.level, LogLevel::Debug);
}

#[test]
fn test_config_partial_layout_keeps_defaults() {
    let config: Config = toml::from_str("[layout]\nhtml_dir = \"www\"\n").unwrap();

    assert_eq!(config.layout.resources_dir, "resources");
    assert_eq!(config.layout.html_dir, "www");
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[error_page]\nlocation = \"/srv/err.html\"\nlangauge = \"fr\"\n",
    )
    .unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.error_page.language, None);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "langauge");
    assert_eq!(warnings[0].line, Some(3));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("language"));
}

#[test]
fn test_load_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[log]\nlevel = \"loud\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();

    assert!(matches!(err, ErrpageError::Config { .. }), "got {:?}", err);
}

#[test]
fn test_load_or_default_explicit_missing_file_fails() {
    let dir = tempdir().unwrap();
    let result = Config::load_or_default(Some(&dir.path().join("nope.toml")));
    assert!(matches!(result, Err(ErrpageError::Io(_))));
}

#[test]
fn test_load_expands_home_in_location() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[error_page]\nlocation = \"~/pages/err.html\"\n").unwrap();

    let config = Config::load(&path).unwrap();

    if let Some(home) = dirs::home_dir() {
        assert_eq!(config.error_page.location, Some(home.join("pages/err.html")));
    }
}

#[test]
fn test_log_level_parse_and_raise() {
    assert_eq!(LogLevel::parse("Warning"), Some(LogLevel::Warn));
    assert_eq!(LogLevel::parse("loud"), None);

    assert_eq!(LogLevel::Warn.raised_by(0), LogLevel::Warn);
    assert_eq!(LogLevel::Warn.raised_by(1), LogLevel::Info);
    assert_eq!(LogLevel::Warn.raised_by(9), LogLevel::Trace);
    assert_eq!(LogLevel::Debug.as_str(), "debug");
}
