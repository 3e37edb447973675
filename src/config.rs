/// User settings loaded from `settings.json`
///
/// The file is optional. Every field has a default, so a partial file
/// only overrides what it names:
/// - Linux: ~/.config/strategy-deck/settings.json
/// - macOS: ~/Library/Application Support/strategy-deck/settings.json
/// - Windows: %APPDATA%\strategy-deck\settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const APP_DIR: &str = "strategy-deck";
const CONFIG_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Initial window width in logical pixels
    pub window_width: f32,
    /// Initial window height in logical pixels
    pub window_height: f32,
    /// Distance below the scroll position used to decide the highlighted section
    pub probe_offset: f32,
    /// Gap left above a section after a nav jump
    pub jump_margin: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 860.0,
            probe_offset: 100.0,
            jump_margin: 16.0,
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load settings from the default location.
/// A missing or unreadable file means defaults; nothing is written back.
pub fn load() -> Config {
    match default_config_path() {
        Some(path) => load_or_default(&path),
        None => Config::default(),
    }
}

fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        debug!("No settings at {}, using defaults", path.display());
        return Config::default();
    }

    match load_from_path(path) {
        Ok(config) => {
            info!("⚙️  Loaded settings from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Ignoring settings file: {}", e);
            Config::default()
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
pub fn save_to_path(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = Config {
            window_width: 1600.0,
            jump_margin: 0.0,
            ..Config::default()
        };
        save_to_path(&config, &path).unwrap();

        assert_eq!(load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "probe_offset": 60.0 }"#).unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.probe_offset, 60.0);
        assert_eq!(config.window_width, Config::default().window_width);
    }

    #[test]
    fn test_missing_file_uses_defaults_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(APP_DIR).join(CONFIG_FILE);

        assert_eq!(load_or_default(&path), Config::default());
        assert!(!path.exists());
        assert!(!dir.path().join(APP_DIR).exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_load_leaves_config_dir_untouched() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        assert_eq!(load(), Config::default());
        assert!(!dir.path().join(APP_DIR).join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_or_default(&path), Config::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "window_width = 3").unwrap();

        assert!(matches!(load_from_path(&path), Err(ConfigError::Parse(_))));
        assert!(matches!(
            load_from_path(&dir.path().join("missing.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
