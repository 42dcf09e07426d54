//! Render command: derive a post and write the HTML preview.

use crate::cli::common::{CliError, CliResult};
use crate::cli::style::load_config;
use crate::models::{ContentModel, GridLayout, StyleSchema};
use crate::presets;
use crate::render::{derive, to_html};
use crate::services::StyleService;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Render a post to an HTML preview
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Content file (JSON with `title` and `items`)
    #[arg(short, long, value_name = "FILE")]
    pub content: PathBuf,

    /// Style file to use
    #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
    pub style: Option<PathBuf>,

    /// Built-in preset to use (defaults to the configured preset)
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Grid rows (1-4, defaults to the configured value)
    #[arg(long, value_name = "N")]
    pub rows: Option<u8>,

    /// Grid columns (1-3, defaults to the configured value)
    #[arg(long, value_name = "N")]
    pub columns: Option<u8>,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    pub out: PathBuf,

    /// Write the derived tree as JSON instead of HTML
    #[arg(long)]
    pub json: bool,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let content = self.read_content()?;
        let style = self.resolve_style(&config.editor.default_preset)?;

        let rows = self.rows.unwrap_or(config.editor.grid_rows);
        let columns = self.columns.unwrap_or(config.editor.grid_columns);
        let grid =
            GridLayout::new(rows, columns).map_err(|e| CliError::validation(e.to_string()))?;

        let tree = derive(&style, &content, grid);
        if tree.grid.hidden_items > 0 {
            tracing::warn!(
                hidden = tree.grid.hidden_items,
                "grid has fewer cells than items"
            );
        }

        let output = if self.json {
            serde_json::to_string_pretty(&tree)
                .map_err(|e| CliError::io(format!("Failed to serialize tree: {e}")))?
        } else {
            to_html(&tree)
        };

        if let Some(parent) = self.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| CliError::io(format!("Failed to create directory: {e}")))?;
        }
        fs::write(&self.out, output).map_err(|e| {
            CliError::io(format!("Failed to write {}: {e}", self.out.display()))
        })?;

        println!(
            "Rendered '{}' ({} items, {}x{} grid) to {}",
            style.name,
            content.len(),
            rows,
            columns,
            self.out.display()
        );
        Ok(())
    }

    fn read_content(&self) -> CliResult<ContentModel> {
        let text = fs::read_to_string(&self.content).map_err(|e| {
            CliError::io(format!(
                "Failed to read content file {}: {e}",
                self.content.display()
            ))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            CliError::validation(format!(
                "Invalid content file {}: {e}",
                self.content.display()
            ))
        })
    }

    fn resolve_style(&self, default_preset: &str) -> CliResult<StyleSchema> {
        if let Some(path) = &self.style {
            return Ok(StyleService::import(path)?);
        }
        let name = self.preset.as_deref().unwrap_or(default_preset);
        presets::find(name).ok_or_else(|| {
            CliError::validation(format!(
                "Unknown preset '{name}'. Available: {}",
                presets::names().join(", ")
            ))
        })
    }
}
