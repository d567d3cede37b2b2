use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn academy(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("academy").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn no_arguments_prints_help() {
    let dir = TempDir::new().unwrap();
    academy(&dir).assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn validate_accepts_builtin_catalog_strictly() {
    let dir = TempDir::new().unwrap();
    academy(&dir)
        .args(["validate", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog is valid (5 modules, 13 lessons)"));
}

#[test]
fn render_writes_to_configured_output_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("academy.toml"), "[storage]\noutput_dir = \"site\"\n").unwrap();

    academy(&dir).arg("render").assert().success().stdout(predicate::str::contains("Wrote"));

    let html = fs::read_to_string(dir.path().join("site/index.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("id=\"lesson-m1l1\""));
}

#[test]
fn render_honors_explicit_out_and_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("branding.toml");
    fs::write(&config, "[site]\ntitle = \"Night School\"\n").unwrap();
    let out = dir.path().join("public/landing.html");

    academy(&dir)
        .arg("--config")
        .arg(&config)
        .arg("render")
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let html = fs::read_to_string(out).unwrap();
    assert!(html.contains("<title>Night School</title>"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    academy(&dir)
        .args(["--config", "nope.toml", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn list_prints_lessons_in_order() {
    let dir = TempDir::new().unwrap();
    let output = academy(&dir).arg("list").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    let first = text.find("m1l1").unwrap();
    let last = text.find("m5l2").unwrap();
    assert!(first < last);
    assert!(text.contains("5 modules, 13 lessons: 6 ready, 7 coming soon, 1 featured"));
}

#[test]
fn list_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let output = academy(&dir).args(["list", "--json"]).assert().success().get_output().stdout.clone();

    let modules: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(modules.as_array().unwrap().len(), 5);
    assert_eq!(modules[1]["lessons"][0]["id"], "m2l1");
    assert_eq!(modules[1]["lessons"][0]["featured"], true);
}

#[test]
fn featured_prints_the_start_here_lesson() {
    let dir = TempDir::new().unwrap();
    academy(&dir)
        .arg("featured")
        .assert()
        .success()
        .stdout(predicate::str::contains("m2l1").and(predicate::str::contains("01_first_finetuning.ipynb")));
}
