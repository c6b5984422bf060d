//! Tests for loading configuration files.

use ratatui::style::Color;
use std::io::Write;
use std::path::PathBuf;
use tictactoe::{Config, DEFAULT_CONFIG_FILE};

#[test]
fn test_from_file_reads_theme() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_file = "game.log"

[theme]
o_color = "magenta"
win_highlight = "lightred"
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(*config.theme().o_color(), Color::Magenta);
    assert_eq!(*config.theme().win_highlight(), Color::LightRed);
    assert_eq!(*config.theme().x_color(), Color::Blue);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Config::load(Some(&missing)).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_unknown_color_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[theme]\nx_color = \"not-a-color\"").unwrap();

    assert!(Config::from_file(file.path()).is_err());
}

#[test]
fn test_load_picks_up_default_file_in_search_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "log_filter = \"trace\"\n[theme]\nx_color = \"red\"\n",
    )
    .unwrap();

    let config = Config::load_from(None, dir.path()).unwrap();

    assert_eq!(config.log_filter(), "trace");
    assert_eq!(*config.theme().x_color(), Color::Red);
}

#[test]
fn test_load_without_any_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = Config::load_from(None, dir.path()).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_explicit_path_wins_over_default_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "log_filter = \"trace\"\n").unwrap();
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "log_filter = \"warn\"\n").unwrap();

    let config = Config::load_from(Some(&explicit), dir.path()).unwrap();

    assert_eq!(config.log_filter(), "warn");
}
