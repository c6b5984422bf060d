//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// File the interactive game writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Cell colors.
    #[serde(default)]
    theme: Theme,
}

/// Colors for marks and end-of-game highlights.
///
/// Values are anything ratatui parses as a color: names such as `"blue"`,
/// hex strings such as `"#ffa500"`, or palette indices.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
pub struct Theme {
    /// Foreground for X marks.
    #[serde(default = "default_x_color")]
    x_color: Color,

    /// Foreground for O marks.
    #[serde(default = "default_o_color")]
    o_color: Color,

    /// Background for the winning line.
    #[serde(default = "default_win_highlight")]
    win_highlight: Color,

    /// Background for every cell after a draw.
    #[serde(default = "default_draw_highlight")]
    draw_highlight: Color,

    /// Border color of the cell under the keyboard cursor.
    #[serde(default = "default_cursor_color")]
    cursor_color: Color,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_x_color() -> Color {
    Color::Blue
}

fn default_o_color() -> Color {
    Color::Green
}

fn default_win_highlight() -> Color {
    // pink
    Color::Rgb(255, 192, 203)
}

fn default_draw_highlight() -> Color {
    // orange
    Color::Rgb(255, 165, 0)
}

fn default_cursor_color() -> Color {
    Color::Yellow
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            win_highlight: default_win_highlight(),
            draw_highlight: default_draw_highlight(),
            cursor_color: default_cursor_color(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the configuration for this run.
    ///
    /// An explicit path must exist. Without one, `tictactoe.toml` in the
    /// working directory is used if present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(explicit, Path::new("."))
    }

    /// Same lookup as [`Config::load`], searching `search_dir` for the
    /// default file.
    #[instrument(fields(search_dir = %search_dir.display()), skip(search_dir))]
    pub fn load_from(explicit: Option<&Path>, search_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback = search_dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_file(fallback)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
