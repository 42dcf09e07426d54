//! Style file and library commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::preset::background_label;
use crate::config::Config;
use crate::models::StyleSchema;
use crate::presets;
use crate::services::{StyleLibrary, StyleService};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Import, export and save styles
#[derive(Debug, Clone, Args)]
pub struct StyleArgs {
    /// Saved-styles file (overrides the configured library)
    #[arg(long, value_name = "FILE", global = true)]
    pub library: Option<PathBuf>,

    /// Style subcommand
    #[command(subcommand)]
    pub command: StyleCommand,
}

/// Style subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum StyleCommand {
    /// Write a preset or saved style to a style file
    Export(ExportArgs),
    /// Check a style file and print a summary
    Import(ImportArgs),
    /// Add a style file to the library
    Save(SaveArgs),
    /// List saved styles
    List(ListArgs),
}

/// Write a preset or saved style to a style file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Built-in preset to export
    #[arg(long, value_name = "NAME", conflicts_with = "saved")]
    pub preset: Option<String>,

    /// Saved style to export
    #[arg(long, value_name = "NAME")]
    pub saved: Option<String>,

    /// Output directory (defaults to the configured export directory)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Check a style file and print a summary
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Style file to read
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a style file to the library
#[derive(Debug, Clone, Args)]
pub struct SaveArgs {
    /// Style file to read
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Save under this name instead of the file's
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,
}

/// List saved styles
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Style summary for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct StyleSummary {
    /// Style name
    pub name: String,
    /// Background variant
    pub background: &'static str,
    /// Font family
    pub font: String,
    /// Whether items carry number badges
    pub show_item_numbers: bool,
}

impl From<&StyleSchema> for StyleSummary {
    fn from(style: &StyleSchema) -> Self {
        Self {
            name: style.name.clone(),
            background: background_label(style.background.fill.kind()),
            font: style.typography.font.clone(),
            show_item_numbers: style.show_item_numbers,
        }
    }
}

/// Saved style list response
#[derive(Debug, Clone, Serialize)]
pub struct StyleListResponse {
    /// Library file
    pub library: String,
    /// Saved styles in insertion order
    pub styles: Vec<StyleSummary>,
    /// Total number of styles
    pub count: usize,
}

impl StyleArgs {
    /// Execute the style command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            StyleCommand::Export(args) => args.execute(self.library.as_deref()),
            StyleCommand::Import(args) => args.execute(),
            StyleCommand::Save(args) => args.execute(self.library.as_deref()),
            StyleCommand::List(args) => args.execute(self.library.as_deref()),
        }
    }
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, library: Option<&Path>) -> CliResult<()> {
        let config = load_config()?;
        let style = match (&self.preset, &self.saved) {
            (Some(name), _) => presets::find(name)
                .ok_or_else(|| CliError::validation(format!("Unknown preset '{name}'")))?,
            (None, Some(name)) => open_library(library, &config)?
                .get(name)
                .cloned()
                .ok_or_else(|| CliError::validation(format!("No saved style named '{name}'")))?,
            (None, None) => {
                return Err(CliError::validation(
                    "Specify a style to export with --preset or --saved",
                ))
            }
        };

        let dir = self.out_dir.clone().unwrap_or_else(|| config.export_dir());
        let path = StyleService::export_to_dir(&style, &dir)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        println!("Exported '{}' to {}", style.name, path.display());
        Ok(())
    }
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self) -> CliResult<()> {
        let style = StyleService::import(&self.file)?;
        let summary = StyleSummary::from(&style);

        if self.json {
            return print_json(&summary);
        }
        println!("Valid style: {}", summary.name);
        println!("  background: {}", summary.background);
        println!("  font:       {}", summary.font);
        Ok(())
    }
}

impl SaveArgs {
    /// Execute the save command
    pub fn execute(&self, library: Option<&Path>) -> CliResult<()> {
        let config = load_config()?;
        let mut style = StyleService::import(&self.file)?;
        if let Some(name) = &self.name {
            style = style.renamed(name.clone());
        }

        let mut library = open_library(library, &config)?;
        let name = style.name.clone();
        library.save(style)?;
        println!("Saved style '{name}'");
        Ok(())
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, library: Option<&Path>) -> CliResult<()> {
        let config = load_config()?;
        let library = open_library(library, &config)?;
        let styles: Vec<StyleSummary> = library.list().iter().map(StyleSummary::from).collect();

        if self.json {
            return print_json(&StyleListResponse {
                library: library
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                count: styles.len(),
                styles,
            });
        }

        if styles.is_empty() {
            println!("No saved styles");
            return Ok(());
        }
        for style in &styles {
            println!("{:<24} {:<9} {}", style.name, style.background, style.font);
        }
        Ok(())
    }
}

pub(crate) fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))
}

fn open_library(over: Option<&Path>, config: &Config) -> CliResult<StyleLibrary> {
    let path = match over {
        Some(path) => path.to_path_buf(),
        None => config
            .library_path()
            .map_err(|e| CliError::io(format!("{e:#}")))?,
    };
    StyleLibrary::open(&path).map_err(|e| CliError::io(format!("{e:#}")))
}
