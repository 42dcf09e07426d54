//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use gridpost::models::{ContentModel, ListItem, StyleSchema};
use gridpost::presets;
use gridpost::services::StyleService;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the gridpost binary
pub fn gridpost_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gridpost")
}

/// Runs gridpost with an isolated config directory.
pub fn run(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(gridpost_bin())
        .env("GRIDPOST_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Content with a title and `count` described items.
pub fn test_content(count: usize) -> ContentModel {
    ContentModel::with_items(
        "Five *habits* of great teams",
        (1..=count)
            .map(|n| {
                ListItem::new(format!("Habit {n}"))
                    .with_description(format!("First line {n}\nSecond *line*"))
            })
            .collect(),
    )
}

/// A valid style distinct from every preset.
pub fn test_style(name: &str) -> StyleSchema {
    let mut style = presets::default_style().renamed(name);
    style.typography.title_size = 52;
    style.show_item_numbers = false;
    style
}

/// Writes `content` as JSON into `dir`.
pub fn write_content(dir: &Path, content: &ContentModel) -> PathBuf {
    let path = dir.join("content.json");
    fs::write(&path, serde_json::to_string_pretty(content).unwrap()).unwrap();
    path
}

/// Writes `style` as a style file into `dir`.
pub fn write_style(dir: &Path, file_name: &str, style: &StyleSchema) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, StyleService::serialize(style).unwrap()).unwrap();
    path
}

/// A temp directory holding a `config/` subdirectory for the binary.
pub struct TestEnv {
    /// Root of the temp tree
    pub dir: TempDir,
}

impl TestEnv {
    /// Creates an empty environment.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        Self { dir }
    }

    /// Root path.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Config directory passed to the binary.
    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Runs gridpost in this environment.
    pub fn run(&self, args: &[&str]) -> Output {
        run(&self.config_dir(), args)
    }
}
