//! Built-in preset commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::BackgroundKind;
use crate::presets;
use crate::services::StyleService;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Inspect built-in presets
#[derive(Debug, Clone, Args)]
pub struct PresetArgs {
    /// Preset subcommand
    #[command(subcommand)]
    pub command: PresetCommand,
}

/// Preset subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PresetCommand {
    /// List built-in presets
    List(ListArgs),
    /// Print a preset as a style file
    Show(ShowArgs),
}

/// List built-in presets
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Print a preset as a style file
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Exact, case-sensitive preset name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Preset summary for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct PresetInfo {
    /// Preset name
    pub name: String,
    /// Background variant
    pub background: &'static str,
    /// Font family
    pub font: String,
}

/// Preset list response
#[derive(Debug, Clone, Serialize)]
pub struct PresetListResponse {
    /// Presets in catalog order
    pub presets: Vec<PresetInfo>,
    /// Total number of presets
    pub count: usize,
}

impl PresetArgs {
    /// Execute the preset command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PresetCommand::List(args) => args.execute(),
            PresetCommand::Show(args) => args.execute(),
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let presets: Vec<PresetInfo> = presets::all()
            .into_iter()
            .map(|style| PresetInfo {
                background: background_label(style.background.fill.kind()),
                font: style.typography.font,
                name: style.name,
            })
            .collect();

        if self.json {
            let count = presets.len();
            return print_json(&PresetListResponse { presets, count });
        }

        for preset in &presets {
            println!("{:<12} {:<9} {}", preset.name, preset.background, preset.font);
        }
        Ok(())
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let style = presets::find(&self.name).ok_or_else(|| {
            CliError::validation(format!(
                "Unknown preset '{}'. Available: {}",
                self.name,
                presets::names().join(", ")
            ))
        })?;
        let text = StyleService::serialize(&style)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        println!("{text}");
        Ok(())
    }
}

/// Lowercase label of a background variant.
pub(crate) const fn background_label(kind: BackgroundKind) -> &'static str {
    match kind {
        BackgroundKind::Solid => "solid",
        BackgroundKind::Gradient => "gradient",
        BackgroundKind::Image => "image",
    }
}
