//! Last-viewed state kept between sessions
//!
//! State file location: `~/.config/dig/state.json` (XDG_CONFIG_HOME).
//! It remembers the side panel width and, per repository path, the key of
//! the record that was selected on exit.

use crate::app::App;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.json";

/// Repositories remembered, most recently used first
pub const MAX_RECENT: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentView {
    pub repo: PathBuf,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Visible side panel width on last exit
    pub side_width: Option<usize>,
    pub recent: Vec<RecentView>,
}

impl PersistedState {
    pub fn default_path() -> Option<PathBuf> {
        crate::config::app_dir().map(|dir| dir.join(STATE_FILE))
    }

    /// Read state from `path`; a missing file is an empty state.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", path.display()))
            }
        };
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Key last viewed in `repo`, matched by exact path.
    pub fn last_key(&self, repo: &Path) -> Option<&str> {
        self.recent
            .iter()
            .find(|view| view.repo == repo)
            .map(|view| view.key.as_str())
    }

    /// Record `key` as last viewed in `repo` and move it to the front.
    pub fn remember(&mut self, repo: &Path, key: &str) {
        self.recent.retain(|view| view.repo != repo);
        self.recent.insert(
            0,
            RecentView {
                repo: repo.to_path_buf(),
                key: key.to_string(),
            },
        );
        self.recent.truncate(MAX_RECENT);
    }

    /// Take the selection and side width from a finished session.
    pub fn record_session(&mut self, app: &App) {
        self.remember(&app.session.repo, &app.current_record().key);
        self.side_width = Some(app.screen.layout.side_width_visible());
    }
}
