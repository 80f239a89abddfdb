//! CLI surface tests using the compiled binary.
//!
//! These tests only exercise commands that read local artifacts; nothing here
//! touches the network.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_settings(dir: &TempDir) {
    fs::write(
        dir.path().join("svcmap.toml"),
        concat!(
            "[host]\n",
            "url = \"https://git.example.com\"\n",
            "\n",
            "[registry]\n",
            "config_project = \"platform/platform-integration-settings\"\n",
            "target_acronyms = [\"def\"]\n",
            "\n",
            "[scan]\n",
            "acronyms = [\"abc\"]\n",
        ),
    )
    .unwrap();
}

fn svcmap(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("svcmap").unwrap();
    cmd.current_dir(dir.path()).env_remove("SVCMAP_CONFIG").arg("--no-progress");
    cmd
}

#[test]
fn help_lists_the_pipeline_commands() {
    Command::cargo_bin("svcmap")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("graph"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn a_subcommand_is_required() {
    Command::cargo_bin("svcmap").unwrap().assert().failure();
}

#[test]
fn missing_settings_file_is_reported() {
    let dir = TempDir::new().unwrap();

    svcmap(&dir)
        .args(["graph", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings file not found"));
}

#[test]
fn graph_without_a_registry_is_a_hard_stop() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir);

    svcmap(&dir)
        .arg("graph")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no integration files"));
}

#[test]
fn graph_builds_from_saved_artifacts() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir);
    fs::create_dir_all(dir.path().join("files")).unwrap();
    fs::write(
        dir.path().join("files").join("registry.json"),
        r#"{"def":[{"project_name":"def-service.url","url":"def-service.internal"}]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("files").join("catalog.json"),
        r#"{"abc":{"abc-service-java":{"feign":[{"file":"Client.java","url":"http://def-service/ping"}]}}}"#,
    )
    .unwrap();

    svcmap(&dir).arg("graph").assert().success();

    let graph = fs::read_to_string(dir.path().join("files").join("graph.json")).unwrap();
    assert!(graph.contains(r#""def-service":["abc-service-java"]"#));
}

#[test]
fn export_flattens_the_saved_graph() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir);
    fs::create_dir_all(dir.path().join("files")).unwrap();
    fs::write(
        dir.path().join("files").join("graph.json"),
        r#"{"def":{"def-service":["abc-service-java"]}}"#,
    )
    .unwrap();

    svcmap(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("def,def-service,abc-service-java"));
}

#[test]
fn integrations_lists_bootstrap_declarations() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir);
    fs::create_dir_all(dir.path().join("files")).unwrap();
    fs::write(
        dir.path().join("files").join("catalog.json"),
        r#"{"abc":{"abc-service-java":{"bootstrap":"def-integration; ghost-integration"}}}"#,
    )
    .unwrap();

    svcmap(&dir)
        .arg("integrations")
        .assert()
        .success()
        .stdout(predicate::str::contains("abc/abc-service-java: def"));
}

#[test]
fn verbose_and_quiet_conflict() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir);

    svcmap(&dir).args(["--verbose", "--quiet", "export"]).assert().failure();
}
