//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::GridLayout;
use crate::presets;
use crate::services::export::ExportOptions;
use crate::services::generation::DEFAULT_ITEM_COUNT;
use crate::services::library::LIBRARY_FILE;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "GRIDPOST_CONFIG_DIR";

/// Largest item count that may be requested from the generator.
pub const MAX_GENERATION_ITEMS: usize = 12;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Saved-styles file (defaults to `saved_styles.json` in the config dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<PathBuf>,
    /// Directory for exported images and style files (defaults to the current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

/// Editor defaults for new sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Preset a new session starts with
    pub default_preset: String,
    /// Grid rows (1-4)
    pub grid_rows: u8,
    /// Grid columns (1-3)
    pub grid_columns: u8,
    /// Number of items requested from the content generator
    #[serde(default = "default_generation_item_count")]
    pub generation_item_count: usize,
}

const fn default_generation_item_count() -> usize {
    DEFAULT_ITEM_COUNT
}

impl Default for EditorConfig {
    fn default() -> Self {
        let grid = GridLayout::default();
        Self {
            default_preset: presets::DEFAULT_PRESET.to_string(),
            grid_rows: grid.rows(),
            grid_columns: grid.columns(),
            generation_item_count: DEFAULT_ITEM_COUNT,
        }
    }
}

impl EditorConfig {
    /// The configured grid.
    ///
    /// # Errors
    ///
    /// Returns an error if rows or columns are out of range.
    pub fn grid(&self) -> Result<GridLayout> {
        Ok(GridLayout::new(self.grid_rows, self.grid_columns)?)
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/GridPost/config.toml`
/// - macOS: `~/Library/Application Support/GridPost/config.toml`
/// - Windows: `%APPDATA%\GridPost\config.toml`
///
/// `GRIDPOST_CONFIG_DIR` replaces the directory on every platform.
///
/// # Validation
///
/// - `default_preset` must name a built-in preset
/// - grid must be within 1-4 rows and 1-3 columns
/// - `generation_item_count` must be within 1-12
/// - export scale must be within 1-8 and the file name a plain name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Editor defaults
    #[serde(default)]
    pub editor: EditorConfig,
    /// Image export settings
    #[serde(default)]
    pub export: ExportOptions,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// - `$GRIDPOST_CONFIG_DIR` when set
    /// - Linux: `~/.config/GridPost/`
    /// - macOS: `~/Library/Application Support/GridPost/`
    /// - Windows: `%APPDATA%\GridPost\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("GridPost");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolved saved-styles file.
    pub fn library_path(&self) -> Result<PathBuf> {
        match &self.paths.library {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(LIBRARY_FILE)),
        }
    }

    /// Resolved export directory.
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.paths
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `config_path`, or defaults if it is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid configuration in {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `config_path` using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "saved configuration");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if presets::find(&self.editor.default_preset).is_none() {
            anyhow::bail!(
                "Unknown default preset '{}'. Available: {}",
                self.editor.default_preset,
                presets::names().join(", ")
            );
        }

        self.editor.grid()?;

        let count = self.editor.generation_item_count;
        if !(1..=MAX_GENERATION_ITEMS).contains(&count) {
            anyhow::bail!(
                "generation_item_count must be between 1 and {MAX_GENERATION_ITEMS}, got {count}"
            );
        }

        self.export.validate()?;

        Ok(())
    }
}
