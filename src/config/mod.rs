//! Configuration management for folio

mod keys;

pub use keys::{Action, ActionGroup, KeyBindings, key_to_string};

use crate::page::RevealConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Redraw interval in milliseconds while idle or animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Rows moved per scroll key press
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: i32,

    /// Rows moved per mouse wheel notch
    #[serde(default = "default_wheel_lines")]
    pub wheel_lines: i32,

    /// Rows left above a section after navigating to it
    #[serde(default = "default_nav_offset")]
    pub nav_offset: i32,

    /// Narrowest terminal width that gets the desktop navigation bar
    #[serde(default = "default_desktop_min_width")]
    pub desktop_min_width: u16,

    /// Ease navigation jumps over several frames instead of jumping
    #[serde(default = "default_smooth_scroll")]
    pub smooth_scroll: bool,

    /// Section reveal effect settings
    #[serde(default)]
    pub reveal: RevealConfig,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_tick_rate() -> u64 {
    33
}

const fn default_scroll_lines() -> i32 {
    1
}

const fn default_wheel_lines() -> i32 {
    3
}

const fn default_nav_offset() -> i32 {
    1
}

const fn default_desktop_min_width() -> u16 {
    80
}

const fn default_smooth_scroll() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            scroll_lines: default_scroll_lines(),
            wheel_lines: default_wheel_lines(),
            nav_offset: default_nav_offset(),
            desktop_min_width: default_desktop_min_width(),
            smooth_scroll: default_smooth_scroll(),
            reveal: RevealConfig::default(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        crate::paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("config.json")
    }

    /// Redraw interval
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
