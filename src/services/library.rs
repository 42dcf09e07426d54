//! Local collection of saved styles.
//!
//! The library is a JSON array of styles kept in one file. It is loaded
//! once when opened and rewritten in full after every successful change.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PostError, PostResult, ValidationError};
use crate::models::StyleSchema;

/// File name of the library inside the config directory.
pub const LIBRARY_FILE: &str = "saved_styles.json";

/// Named styles, unique by name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StyleLibrary {
    path: Option<PathBuf>,
    styles: Vec<StyleSchema>,
}

impl StyleLibrary {
    /// Opens the library stored at `path`.
    ///
    /// A missing file yields an empty library; the file is created on the
    /// first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not a JSON
    /// array of styles, holds an invalid style or repeats a name.
    pub fn open(path: &Path) -> Result<Self> {
        let styles = if path.exists() {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read style library {}", path.display()))?;
            parse_library(&text)
                .with_context(|| format!("Failed to parse style library {}", path.display()))?
        } else {
            Vec::new()
        };
        tracing::debug!(path = %path.display(), count = styles.len(), "opened style library");

        Ok(Self {
            path: Some(path.to_path_buf()),
            styles,
        })
    }

    /// A library that lives only in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Saved styles in insertion order.
    #[must_use]
    pub fn list(&self) -> &[StyleSchema] {
        &self.styles
    }

    /// Finds a style by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StyleSchema> {
        self.styles.iter().find(|style| style.name == name)
    }

    /// Number of saved styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Adds a style and writes the library back.
    ///
    /// Never overwrites: a style with the same name is an error and leaves
    /// the collection untouched. When the write fails the style is not kept
    /// in memory either.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateName`] for a taken name,
    /// [`ValidationError::InvalidField`] for an invalid style and
    /// [`PostError::Other`] when the file cannot be written.
    pub fn save(&mut self, style: StyleSchema) -> PostResult<()> {
        style.validate()?;
        if self.get(&style.name).is_some() {
            return Err(ValidationError::DuplicateName(style.name).into());
        }

        let name = style.name.clone();
        self.styles.push(style);
        if let Err(e) = self.persist() {
            self.styles.pop();
            return Err(PostError::Other(e));
        }
        tracing::info!(name = %name, "saved style to library");
        Ok(())
    }

    /// Removes a style by name and writes the library back.
    ///
    /// Returns the removed style, or `None` when no style has that name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written; the style is kept in
    /// that case.
    pub fn remove(&mut self, name: &str) -> Result<Option<StyleSchema>> {
        let Some(index) = self.styles.iter().position(|style| style.name == name) else {
            return Ok(None);
        };
        let removed = self.styles.remove(index);
        if let Err(e) = self.persist() {
            self.styles.insert(index, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    /// Writes the whole collection using a temp file and rename.
    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let text =
            serde_json::to_string_pretty(&self.styles).context("Failed to serialize library")?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, text)
            .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp file to {}", path.display()))?;
        Ok(())
    }
}

fn parse_library(text: &str) -> Result<Vec<StyleSchema>> {
    let styles: Vec<StyleSchema> = serde_json::from_str(text).context("Invalid JSON")?;
    for (index, style) in styles.iter().enumerate() {
        style
            .validate()
            .with_context(|| format!("Style #{} is invalid", index + 1))?;
        if styles[..index].iter().any(|other| other.name == style.name) {
            anyhow::bail!("Style name '{}' appears more than once", style.name);
        }
    }
    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use tempfile::TempDir;

    #[test]
    fn test_duplicate_name_keeps_first() {
        let mut library = StyleLibrary::in_memory();
        let first = presets::default_style().renamed("Mine");
        let mut second = first.clone();
        second.typography.title_size = 60;

        library.save(first.clone()).unwrap();
        let err = library.save(second).unwrap_err();
        assert!(matches!(
            err,
            PostError::Validation(ValidationError::DuplicateName(ref name)) if name == "Mine"
        ));
        assert_eq!(library.list(), &[first]);
    }

    #[test]
    fn test_save_persists_and_reopens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(LIBRARY_FILE);

        let mut library = StyleLibrary::open(&path).unwrap();
        assert!(library.is_empty());
        library.save(presets::default_style().renamed("A")).unwrap();
        library.save(presets::default_style().renamed("B")).unwrap();

        let reopened = StyleLibrary::open(&path).unwrap();
        let names: Vec<_> = reopened.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_rejects_invalid_style() {
        let mut library = StyleLibrary::in_memory();
        let err = library.save(presets::default_style().renamed("")).unwrap_err();
        assert!(matches!(err, PostError::Validation(_)));
        assert!(library.is_empty());
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LIBRARY_FILE);
        let mut library = StyleLibrary::open(&path).unwrap();
        library.save(presets::default_style().renamed("A")).unwrap();

        assert!(library.remove("missing").unwrap().is_none());
        assert_eq!(library.remove("A").unwrap().unwrap().name, "A");
        assert!(StyleLibrary::open(&path).unwrap().is_empty());
    }

    #[test]
    fn test_open_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LIBRARY_FILE);
        fs::write(&path, "{\"not\": \"an array\"}").unwrap();
        assert!(StyleLibrary::open(&path).is_err());
    }

    #[test]
    fn test_open_rejects_repeated_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LIBRARY_FILE);
        let style = presets::default_style();
        let text = serde_json::to_string(&vec![style.clone(), style]).unwrap();
        fs::write(&path, text).unwrap();
        let err = StyleLibrary::open(&path).unwrap_err();
        assert!(format!("{err:#}").contains("more than once"));
    }
}
