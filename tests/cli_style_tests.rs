//! End-to-end tests for `gridpost style` commands.

use std::fs;

mod fixtures;
use fixtures::*;

use gridpost::presets;
use gridpost::services::{StyleLibrary, StyleService};

// ============================================================================
// Export / Import
// ============================================================================

#[test]
fn test_style_export_preset() {
    let env = TestEnv::new();
    let out_dir = env.root().join("out");
    let output = env.run(&[
        "style",
        "export",
        "--preset",
        "Sunset",
        "--out-dir",
        out_dir.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let path = out_dir.join("sunset.json");
    assert!(path.exists());
    assert_eq!(
        StyleService::import(&path).unwrap(),
        presets::find("Sunset").unwrap()
    );
}

#[test]
fn test_style_export_requires_source() {
    let env = TestEnv::new();
    let output = env.run(&["style", "export"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_style_import_valid() {
    let env = TestEnv::new();
    let path = write_style(env.root(), "brand.json", &test_style("Brand Style"));
    let output = env.run(&["style", "import", "--file", path.to_str().unwrap(), "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["name"], "Brand Style");
    assert_eq!(result["show_item_numbers"], false);
}

#[test]
fn test_style_import_rejects_incomplete_file() {
    let env = TestEnv::new();
    let path = env.root().join("broken.json");
    fs::write(&path, r##"{"name":"Half","background":{"type":"solid","color":"#000000"}}"##)
        .unwrap();

    let output = env.run(&["style", "import", "--file", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("deserialization error"));
}

#[test]
fn test_style_import_missing_file() {
    let env = TestEnv::new();
    let path = env.root().join("nope.json");
    let output = env.run(&["style", "import", "--file", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

// ============================================================================
// Library
// ============================================================================

#[test]
fn test_style_save_and_list() {
    let env = TestEnv::new();
    let library = env.root().join("library.json");
    let file = write_style(env.root(), "a.json", &test_style("Alpha"));

    let output = env.run(&[
        "style",
        "save",
        "--file",
        file.to_str().unwrap(),
        "--library",
        library.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let output = env.run(&[
        "style",
        "list",
        "--json",
        "--library",
        library.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["count"], 1);
    assert_eq!(result["styles"][0]["name"], "Alpha");
}

#[test]
fn test_style_save_duplicate_name_fails() {
    let env = TestEnv::new();
    let library = env.root().join("library.json");
    let first = write_style(env.root(), "a.json", &test_style("Alpha"));
    let mut changed = test_style("Alpha");
    changed.typography.title_size = 30;
    let second = write_style(env.root(), "b.json", &changed);

    let save = |file: &std::path::Path| {
        env.run(&[
            "style",
            "save",
            "--file",
            file.to_str().unwrap(),
            "--library",
            library.to_str().unwrap(),
        ])
    };
    assert_eq!(save(&first).status.code(), Some(0));
    let output = save(&second);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));

    let saved = StyleLibrary::open(&library).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved.list()[0].typography.title_size, 52);
}

#[test]
fn test_style_save_with_new_name() {
    let env = TestEnv::new();
    let library = env.root().join("library.json");
    let file = write_style(env.root(), "a.json", &test_style("Alpha"));

    let output = env.run(&[
        "style",
        "save",
        "--file",
        file.to_str().unwrap(),
        "--name",
        "Renamed",
        "--library",
        library.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(StyleLibrary::open(&library).unwrap().get("Renamed").is_some());
}

#[test]
fn test_style_list_uses_configured_library() {
    let env = TestEnv::new();
    let output = env.run(&["style", "list"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No saved styles"));
}

#[test]
fn test_style_export_saved() {
    let env = TestEnv::new();
    let library_path = env.root().join("library.json");
    let mut library = StyleLibrary::open(&library_path).unwrap();
    library.save(test_style("Team Look")).unwrap();

    let out_dir = env.root().join("exports");
    let output = env.run(&[
        "style",
        "export",
        "--saved",
        "Team Look",
        "--out-dir",
        out_dir.to_str().unwrap(),
        "--library",
        library_path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(out_dir.join("team-look.json").exists());
}

#[test]
fn test_style_save_rejects_name_with_path_separator() {
    let env = TestEnv::new();
    let library = env.root().join("library.json");
    let file = write_style(env.root(), "a.json", &test_style("Alpha"));

    let output = env.run(&[
        "style",
        "save",
        "--file",
        file.to_str().unwrap(),
        "--name",
        "../outside",
        "--library",
        library.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'/'"));
    assert!(!library.exists());
}
