// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedLightbox";

/// How the player box derives its display size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeMode {
    /// Keep the box ratio fixed to its configured value.
    #[default]
    Fixed,
    /// Derive the ratio from the attached media's dimensions.
    Auto,
    /// Fill the wrapper, no clamping.
    Cover,
}

/// Per-player presentation options, the analog of the original root
/// element's configuration attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerOptions {
    /// Start playback automatically once media is ready after open.
    pub autoplay: bool,
    /// Start with audio muted.
    pub start_muted: bool,
    /// Aspect-ratio sizing behavior.
    pub size_mode: SizeMode,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            start_muted: false,
            size_mode: SizeMode::Auto,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerOptions,
    /// Hover-control auto-hide delay override (milliseconds).
    #[serde(default)]
    pub hover_hide_ms: Option<u64>,
    /// Startup page name (`home`, `about`, `contact`).
    #[serde(default)]
    pub start_page: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player: PlayerOptions::default(),
            hover_hide_ms: Some(HOVER_HIDE_DELAY_MS),
            start_page: None,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_player_options() {
        let config = Config {
            player: PlayerOptions {
                autoplay: false,
                start_muted: true,
                size_mode: SizeMode::Cover,
            },
            hover_hide_ms: Some(1500),
            start_page: Some("about".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.player, config.player);
        assert_eq!(loaded.hover_hide_ms, config.hover_hide_ms);
        assert_eq!(loaded.start_page, config.start_page);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.player.autoplay);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_player_options_autoplay_and_auto_size() {
        let options = PlayerOptions::default();
        assert!(options.autoplay);
        assert!(!options.start_muted);
        assert_eq!(options.size_mode, SizeMode::Auto);
    }
}
