//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::presets;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Preset new sessions start with
    #[arg(long, value_name = "NAME")]
    default_preset: Option<String>,

    /// Default grid rows (1-4)
    #[arg(long, value_name = "N")]
    grid_rows: Option<u8>,

    /// Default grid columns (1-3)
    #[arg(long, value_name = "N")]
    grid_columns: Option<u8>,

    /// Image export scale (1-8)
    #[arg(long, value_name = "N")]
    export_scale: Option<u32>,

    /// Saved-styles file
    #[arg(long, value_name = "FILE")]
    library: Option<PathBuf>,

    /// Directory for exported files
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    editor: EditorOutput,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    library: String,
    export_dir: String,
}

#[derive(Serialize, Debug)]
struct EditorOutput {
    default_preset: String,
    grid_rows: u8,
    grid_columns: u8,
    generation_item_count: usize,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    scale: u32,
    file_name: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let output = build_output(&config)?;

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.default_preset.is_none()
            && self.grid_rows.is_none()
            && self.grid_columns.is_none()
            && self.export_scale.is_none()
            && self.library.is_none()
            && self.export_dir.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-preset, --grid-rows, --grid-columns, --export-scale, --library, or --export-dir",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(name) = &self.default_preset {
            if presets::find(name).is_none() {
                return Err(CliError::validation(format!(
                    "Unknown preset '{name}'. Available: {}",
                    presets::names().join(", ")
                )));
            }
            config.editor.default_preset.clone_from(name);
        }
        if let Some(rows) = self.grid_rows {
            config.editor.grid_rows = rows;
        }
        if let Some(columns) = self.grid_columns {
            config.editor.grid_columns = columns;
        }
        if let Some(scale) = self.export_scale {
            config.export.scale = scale;
        }
        if let Some(path) = &self.library {
            config.paths.library = Some(path.clone());
        }
        if let Some(path) = &self.export_dir {
            config.paths.export_dir = Some(path.clone());
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn build_output(config: &Config) -> CliResult<ConfigOutput> {
    let config_file = Config::config_file_path().map_err(|e| CliError::io(format!("{e:#}")))?;
    let library = config
        .library_path()
        .map_err(|e| CliError::io(format!("{e:#}")))?;

    Ok(ConfigOutput {
        config_file: config_file.to_string_lossy().to_string(),
        paths: PathsOutput {
            library: library.to_string_lossy().to_string(),
            export_dir: config.export_dir().to_string_lossy().to_string(),
        },
        editor: EditorOutput {
            default_preset: config.editor.default_preset.clone(),
            grid_rows: config.editor.grid_rows,
            grid_columns: config.editor.grid_columns,
            generation_item_count: config.editor.generation_item_count,
        },
        export: ExportOutput {
            scale: config.export.scale,
            file_name: config.export.file_name.clone(),
        },
    })
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("{APP_NAME} Configuration");
    println!("======================");
    println!("File: {}", output.config_file);
    println!();

    println!("Paths:");
    println!("  Library: {}", output.paths.library);
    println!("  Export Directory: {}", output.paths.export_dir);
    println!();

    println!("Editor:");
    println!("  Default Preset: {}", output.editor.default_preset);
    println!(
        "  Grid: {} rows x {} columns",
        output.editor.grid_rows, output.editor.grid_columns
    );
    println!(
        "  Generated Items: {}",
        output.editor.generation_item_count
    );
    println!();

    println!("Export:");
    println!("  Scale: {}x", output.export.scale);
    println!("  File Name: {}", output.export.file_name);
    println!();
}
