//! Preferences persistence for the new-project state record.
//!
//! The core treats [`NewProjectState`] as an explicit value passed in
//! and out; this store is the collaborator that keeps it between runs,
//! as a small TOML file next to the config file. Nothing depends on
//! the store being available: a missing or broken file simply yields
//! the defaults.

use std::path::PathBuf;

use tracing::{debug, warn};

use kickoff_core::state::NewProjectState;

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// File-backed preferences store.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Store at an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store next to the active config file: the directory of the
    /// `--config` override when given, otherwise the default config
    /// directory.
    pub fn for_config(config_override: Option<&PathBuf>) -> Self {
        let config_path = config_override
            .cloned()
            .unwrap_or_else(AppConfig::config_path);
        let dir = config_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();
        Self::at(dir.join("prefs.toml"))
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the state, falling back to defaults when the file is
    /// absent or unreadable.
    pub fn load(&self) -> NewProjectState {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no preferences file, using defaults");
                return NewProjectState::default();
            }
        };
        match toml::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "preferences file unreadable, using defaults");
                NewProjectState::default()
            }
        }
    }

    /// Persist the state, creating the parent directory if needed.
    pub fn save(&self, state: &NewProjectState) -> CliResult<()> {
        let toml = toml::to_string_pretty(state).map_err(|e| CliError::ConfigError {
            message: format!("failed to serialise preferences: {e}"),
            source: Some(Box::new(e)),
        })?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
                message: format!("failed to create preferences directory '{}'", parent.display()),
                source: e,
            })?;
        }

        std::fs::write(&self.path, toml).map_err(|e| CliError::IoError {
            message: format!("failed to write preferences to '{}'", self.path.display()),
            source: e,
        })
    }
}
