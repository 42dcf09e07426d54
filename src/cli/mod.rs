//! CLI command handlers for GridPost.
//!
//! This module provides headless, scriptable access to presets, style files,
//! the saved-style library, rendering and configuration.

pub mod common;
pub mod config;
pub mod preset;
pub mod render;
pub mod style;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use preset::PresetArgs;
pub use render::RenderArgs;
pub use style::StyleArgs;
