//! Raster export through a render surface.
//!
//! The crate ships no rasterizer; a [`RenderSurface`] turns a
//! [`VisualTree`] into pixels, and this module writes the result.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PostResult, ValidationError};
use crate::render::VisualTree;

/// Largest accepted export scale.
pub const MAX_SCALE: u32 = 8;

/// Encoded raster image returned by a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// PNG bytes.
    pub png: Vec<u8>,
}

/// Something that can rasterize a visual tree, such as a headless browser
/// fed with [`crate::render::to_html`].
pub trait RenderSurface {
    /// Renders `tree` at `scale` device pixels per CSS pixel.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PostError::Render`] when rasterization fails.
    fn render(&mut self, tree: &VisualTree, scale: u32) -> PostResult<RasterImage>;
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Device pixels per CSS pixel.
    pub scale: u32,
    /// File name of the written image.
    pub file_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: 2,
            file_name: "post.png".to_string(),
        }
    }
}

impl ExportOptions {
    /// Checks scale and file name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] for a scale outside
    /// `1..=8` or a file name that is empty or contains a path separator.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_SCALE).contains(&self.scale) {
            return Err(ValidationError::field(
                "scale",
                format!("scale {} must be between 1 and {MAX_SCALE}", self.scale),
            ));
        }
        if self.file_name.trim().is_empty() || self.file_name.contains(['/', '\\']) {
            return Err(ValidationError::field(
                "file_name",
                format!("'{}' is not a plain file name", self.file_name),
            ));
        }
        Ok(())
    }

    /// Expected pixel size of a tree at this scale.
    #[must_use]
    pub const fn pixel_size(&self, tree: &VisualTree) -> (u32, u32) {
        (tree.canvas.width * self.scale, tree.canvas.height * self.scale)
    }
}

/// Writes `image` into `dir` under the configured file name.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be written.
pub fn write_raster(image: &RasterImage, dir: &Path, options: &ExportOptions) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    let path = dir.join(&options.file_name);
    fs::write(&path, &image.png)
        .with_context(|| format!("Failed to write image to {}", path.display()))?;
    tracing::info!(path = %path.display(), width = image.width, height = image.height, "exported image");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentModel, GridLayout};
    use crate::presets;
    use crate::render::derive;
    use tempfile::TempDir;

    #[test]
    fn test_default_options() {
        let options = ExportOptions::default();
        assert!(options.validate().is_ok());
        let tree = derive(&presets::default_style(), &ContentModel::new(), GridLayout::default());
        assert_eq!(options.pixel_size(&tree), (1200, 1500));
    }

    #[test]
    fn test_validate_options() {
        let mut options = ExportOptions::default();
        options.scale = 0;
        assert!(options.validate().is_err());
        options.scale = 9;
        assert!(options.validate().is_err());
        options.scale = 1;
        options.file_name = "../post.png".to_string();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_write_raster() {
        let dir = TempDir::new().unwrap();
        let image = RasterImage {
            width: 1,
            height: 1,
            png: vec![1, 2, 3],
        };
        let path = write_raster(&image, dir.path(), &ExportOptions::default()).unwrap();
        assert_eq!(fs::read(path).unwrap(), vec![1, 2, 3]);
    }
}
