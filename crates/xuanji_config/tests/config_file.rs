use std::fs;

use tempfile::TempDir;
use xuanji_config::{ConfigError, ENV_CONFIG, ENV_SPREAD, XuanjiConfig};

fn write(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("xuanji.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn file_then_env() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "default_timezone = \"Asia/Shanghai\"\ndefault_spread = \"Horseshoe\"\nlog_filter = \"debug\"\n",
    );
    let env = |key: &str| (key == ENV_SPREAD).then(|| "Relationship".to_string());
    let config = XuanjiConfig::load_with(Some(&path), env).unwrap();
    assert_eq!(config.default_timezone.as_deref(), Some("Asia/Shanghai"));
    assert_eq!(config.default_spread, "Relationship");
    assert_eq!(config.log_filter, "debug");
}

#[test]
fn path_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "seed = 12\n");
    let path_str = path.to_string_lossy().into_owned();
    let env = move |key: &str| (key == ENV_CONFIG).then(|| path_str.clone());
    let config = XuanjiConfig::load_with(None, env).unwrap();
    assert_eq!(config.seed, Some(12));
}

#[test]
fn explicit_path_wins_over_environment() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "seed = 1\n");
    let env = |key: &str| (key == ENV_CONFIG).then(|| "/nonexistent/xuanji.toml".to_string());
    let config = XuanjiConfig::load_with(Some(&path), env).unwrap();
    assert_eq!(config.seed, Some(1));
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = XuanjiConfig::load_with(Some(&path), |_| None).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "seed = \"not a number\"\n");
    let err = XuanjiConfig::load_with(Some(&path), |_| None).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
