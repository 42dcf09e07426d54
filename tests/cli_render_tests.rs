//! End-to-end tests for `gridpost render`.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_render_html_with_default_preset() {
    let env = TestEnv::new();
    let content = write_content(env.root(), &test_content(3));
    let out = env.root().join("post.html");

    let output = env.run(&[
        "render",
        "--content",
        content.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Rendered 'Default' (3 items, 2x2 grid)"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Habit 3"));
    assert!(html.contains("First line 1<br>Second"));
}

#[test]
fn test_render_json_tree() {
    let env = TestEnv::new();
    let content = write_content(env.root(), &test_content(5));
    let out = env.root().join("tree.json");

    let output = env.run(&[
        "render",
        "--content",
        content.to_str().unwrap(),
        "--preset",
        "Minimal",
        "--rows",
        "1",
        "--columns",
        "3",
        "--out",
        out.to_str().unwrap(),
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let tree: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(tree["grid"]["cells"].as_array().unwrap().len(), 3);
    assert_eq!(tree["grid"]["hiddenItems"], 2);
    assert_eq!(tree["canvas"]["width"], 600);
    assert_eq!(tree["background"]["kind"], "solid");
}

#[test]
fn test_render_with_style_file() {
    let env = TestEnv::new();
    let content = write_content(env.root(), &test_content(1));
    let style = write_style(env.root(), "custom.json", &test_style("Custom"));
    let out = env.root().join("nested").join("post.html");

    let output = env.run(&[
        "render",
        "--content",
        content.to_str().unwrap(),
        "--style",
        style.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(fs::read_to_string(&out).unwrap().contains("font-size:52px"));
}

#[test]
fn test_render_rejects_bad_grid() {
    let env = TestEnv::new();
    let content = write_content(env.root(), &test_content(1));
    let out = env.root().join("post.html");

    let output = env.run(&[
        "render",
        "--content",
        content.to_str().unwrap(),
        "--columns",
        "4",
        "--out",
        out.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
}

#[test]
fn test_render_rejects_bad_content() {
    let env = TestEnv::new();
    let content = env.root().join("content.json");
    fs::write(&content, "[1, 2, 3]").unwrap();
    let out = env.root().join("post.html");

    let output = env.run(&[
        "render",
        "--content",
        content.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid content file"));
}

#[test]
fn test_render_uses_configured_grid() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set", "--grid-rows", "3", "--grid-columns", "1"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let content = write_content(env.root(), &test_content(2));
    let out = env.root().join("tree.json");
    let output = env.run(&[
        "render",
        "--content",
        content.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(0));
    let tree: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(tree["grid"]["rows"], 3);
    assert_eq!(tree["grid"]["cells"].as_array().unwrap().len(), 3);
}
