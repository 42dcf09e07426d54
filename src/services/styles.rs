//! Style file encoding and import/export.
//!
//! A style file is the pretty-printed JSON encoding of one [`StyleSchema`].
//! Decoding is strict: the text must describe a complete schema that also
//! passes [`StyleSchema::validate`], otherwise nothing is returned.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PostError, PostResult};
use crate::models::StyleSchema;

/// File extension of style files.
pub const STYLE_EXTENSION: &str = "json";

/// Service for style file encoding and file I/O.
pub struct StyleService;

impl StyleService {
    /// Encodes a style losslessly.
    ///
    /// # Errors
    ///
    /// Returns an error if the style cannot be encoded.
    pub fn serialize(style: &StyleSchema) -> Result<String> {
        serde_json::to_string_pretty(style)
            .with_context(|| format!("Failed to serialize style '{}'", style.name))
    }

    /// Decodes and validates a style.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::Deserialization`] for malformed JSON, missing
    /// fields, bad colors, out-of-range fractions or values that fail
    /// validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridpost::presets;
    /// use gridpost::services::StyleService;
    ///
    /// let style = presets::default_style();
    /// let text = StyleService::serialize(&style)?;
    /// assert_eq!(StyleService::deserialize(&text)?, style);
    /// assert!(StyleService::deserialize("{}").is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn deserialize(text: &str) -> PostResult<StyleSchema> {
        let style: StyleSchema = serde_json::from_str(text)
            .map_err(|e| PostError::deserialization(format!("not a valid style file: {e}")))?;
        style
            .validate()
            .map_err(|e| PostError::deserialization(format!("style rejected: {e}")))?;
        Ok(style)
    }

    /// Writes `style` into `dir` under its export file name.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn export_to_dir(style: &StyleSchema, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        let path = dir.join(export_file_name(&style.name)?);
        let text = Self::serialize(style)?;
        fs::write(&path, text)
            .with_context(|| format!("Failed to write style to {}", path.display()))?;
        Ok(path)
    }

    /// Reads and decodes a style file.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::Other`] when the file cannot be read and
    /// [`PostError::Deserialization`] when its content is not a valid style.
    pub fn import(path: &Path) -> PostResult<StyleSchema> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read style file {}", path.display()))?;
        Self::deserialize(&text)
    }
}

/// File name for an exported style.
///
/// Lowercases the name, collapses each whitespace run into one hyphen and
/// appends `.json`. No other characters are touched.
///
/// # Errors
///
/// Returns an error if the name contains a path separator or the
/// whitespace pattern cannot be compiled.
///
/// # Examples
///
/// ```
/// # use gridpost::services::styles::export_file_name;
/// assert_eq!(export_file_name("My  Dark\tStyle")?, "my-dark-style.json");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn export_file_name(name: &str) -> Result<String> {
    if name.contains(['/', '\\']) {
        anyhow::bail!("Style name '{name}' cannot be used as a file name");
    }
    let whitespace = Regex::new(r"\s+").context("Failed to create whitespace regex")?;
    let slug = whitespace.replace_all(&name.to_lowercase(), "-").into_owned();
    Ok(format!("{slug}.{STYLE_EXTENSION}"))
}
