//! Configuration file support for dig
//!
//! Config file location: `~/.config/dig/config.toml` (XDG_CONFIG_HOME)
//!
//! Example config:
//! ```toml
//! [ui]
//! side_width = 20
//! side_width_hidden = 0
//! side_visible = true
//! horizontal_step = 4
//!
//! [theme]
//! added = "green"
//! removed = "#BF616A"
//! selection_bg = "blue"
//! ```

use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;

const APP_DIR: &str = "dig";
const CONFIG_FILE: &str = "config.toml";

/// UI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Side panel width when no width was saved from a previous session
    pub side_width: usize,
    /// Side panel width while hidden
    pub side_width_hidden: usize,
    /// Start with the side panel shown
    pub side_visible: bool,
    /// Columns per horizontal scroll step in the diff
    pub horizontal_step: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            side_width: 20,
            side_width_hidden: 0,
            side_visible: true,
            horizontal_step: 4,
        }
    }
}

/// Theme colors as written in the config file.
///
/// Values are anything ratatui's `Color` parses: names (`"green"`,
/// `"darkgray"`), indexed colors (`"42"`) or hex (`"#A3BE8C"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub added: String,
    pub removed: String,
    pub text: String,
    pub selection_fg: String,
    pub selection_bg: String,
    pub status_fg: String,
    pub status_bg: String,
    pub gutter: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            added: "green".to_string(),
            removed: "red".to_string(),
            text: "reset".to_string(),
            selection_fg: "white".to_string(),
            selection_bg: "green".to_string(),
            status_fg: "black".to_string(),
            status_bg: "white".to_string(),
            gutter: "darkgray".to_string(),
        }
    }
}

/// Resolved theme - all ratatui Colors ready to use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub added: Color,
    pub removed: Color,
    pub text: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub status_fg: Color,
    pub status_bg: Color,
    pub gutter: Color,
}

impl Default for Theme {
    fn default() -> Self {
        ThemeConfig::default().resolve()
    }
}

impl ThemeConfig {
    /// Resolve to concrete colors, falling back per token on parse errors
    pub fn resolve(&self) -> Theme {
        Theme {
            added: resolve_color("added", &self.added, Color::Green),
            removed: resolve_color("removed", &self.removed, Color::Red),
            text: resolve_color("text", &self.text, Color::Reset),
            selection_fg: resolve_color("selection_fg", &self.selection_fg, Color::White),
            selection_bg: resolve_color("selection_bg", &self.selection_bg, Color::Green),
            status_fg: resolve_color("status_fg", &self.status_fg, Color::Black),
            status_bg: resolve_color("status_bg", &self.status_bg, Color::White),
            gutter: resolve_color("gutter", &self.gutter, Color::DarkGray),
        }
    }
}

fn resolve_color(token: &str, value: &str, fallback: Color) -> Color {
    value.trim().parse::<Color>().unwrap_or_else(|_| {
        tracing::warn!(token, value, "invalid theme color, using default");
        fallback
    })
}

/// Root configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub theme: ThemeConfig,
}

/// Directory holding dig's config and state files, preferring XDG.
pub fn app_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join(APP_DIR));
        }
    }
    dirs::home_dir().map(|home| home.join(".config").join(APP_DIR))
}

impl Config {
    /// Get all possible config file paths in priority order
    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(dir) = app_dir() {
            paths.push(dir.join(CONFIG_FILE));
        }

        // Platform-specific config dir (~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join(CONFIG_FILE);
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        paths
    }

    /// Get the first existing config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_paths().into_iter().find(|p| p.exists())
    }

    /// Load config from the first existing path.
    /// Returns default config if the file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read config");
                return Self::default();
            }
        };
        Self::from_toml(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "failed to parse config");
            Self::default()
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
