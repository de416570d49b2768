use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn clusterprov() -> assert_cmd::Command {
    cargo_bin_cmd!("clusterprov")
}

// ── Help / Version ──

#[test]
fn shows_help() {
    clusterprov()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("List, create and configure GKE clusters"));
}

#[test]
fn shows_version() {
    clusterprov()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clusterprov"));
}

#[test]
fn help_lists_subcommands() {
    clusterprov()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("projects"))
        .stdout(predicate::str::contains("clusters"))
        .stdout(predicate::str::contains("vm-sizes"))
        .stdout(predicate::str::contains("configure"));
}

// ── Project resolution ──

#[test]
fn clusters_without_project_id_fails() {
    let tmp = TempDir::new().unwrap();

    clusterprov()
        .current_dir(tmp.path())
        .arg("clusters")
        .assert()
        .failure()
        .stderr(predicate::str::contains("gcp_project_id not set"));
}

#[test]
fn create_without_project_id_fails() {
    let tmp = TempDir::new().unwrap();

    clusterprov()
        .current_dir(tmp.path())
        .args(["create", "--name", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gcp_project_id not set"));
}

#[test]
fn create_requires_name() {
    clusterprov()
        .arg("create")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn malformed_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("clusterprov.toml"), "[project\n").unwrap();

    clusterprov()
        .current_dir(tmp.path())
        .arg("clusters")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}
