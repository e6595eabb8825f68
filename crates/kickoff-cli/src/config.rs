//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.
//! The CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, or the default location)
//! 3. Built-in defaults (always present; a missing file is not an error)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Template source settings.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template directory; when unset, the per-user data directory is
    /// used (see [`AppConfig::default_templates_dir`]).
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from `config_file` (the `--config` value) or
    /// the default location. A missing file yields the defaults; an
    /// unreadable or unparseable file is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("could not read config file '{}'", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("could not parse config file '{}'", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kickoff.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "kickoff", "kickoff")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kickoff.toml"))
    }

    /// The template directory to copy from: the configured override,
    /// or the per-user default.
    pub fn templates_dir(&self) -> PathBuf {
        self.templates
            .dir
            .clone()
            .unwrap_or_else(Self::default_templates_dir)
    }

    /// The fixed per-user template folder, under the application's
    /// support (data) directory.
    pub fn default_templates_dir() -> PathBuf {
        directories::ProjectDirs::from("dev", "kickoff", "kickoff")
            .map(|d| d.data_dir().join("templates"))
            .unwrap_or_else(|| PathBuf::from("templates"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = AppConfig::load(Some(&PathBuf::from("/definitely/not/here.toml"))).unwrap();
        assert_eq!(cfg.templates.dir, None);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn parses_partial_config() {
        let cfg: AppConfig = toml::from_str("[output]\nno_color = true\n").unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.templates.dir, None);
    }

    #[test]
    fn templates_dir_prefers_configured_value() {
        let cfg: AppConfig = toml::from_str("[templates]\ndir = \"/srv/templates\"\n").unwrap();
        assert_eq!(cfg.templates_dir(), PathBuf::from("/srv/templates"));
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(back.templates.dir, None);
    }
}
