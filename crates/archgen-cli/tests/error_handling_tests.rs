//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn archgen() -> Command {
    let mut cmd = Command::cargo_bin("archgen").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn invalid_service_name_exits_2_with_suggestions() {
    archgen()
        .args(["generate", "9User"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid service name"))
        .stderr(predicate::str::contains("start with a letter"))
        .stderr(predicate::str::contains("Examples: User, OrderHistory"));
}

#[test]
fn empty_service_name_is_rejected() {
    archgen()
        .args(["generate", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid service name"));
}

#[test]
fn existing_output_directory_requires_force() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("user-service");
    std::fs::create_dir_all(&root).unwrap();

    archgen()
        .args(["generate", "User"])
        .arg("--root")
        .arg(&root)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn arity_mismatch_reports_the_failed_node() {
    // BaseService declares one type variable; binding two must fail.
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("user-service");

    archgen()
        .args([
            "generate",
            "User",
            "--param",
            "java.lang.String",
            "--param",
            "java.lang.Integer",
        ])
        .arg("--root")
        .arg(&root)
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("declares 1 type parameter(s)"))
        .stderr(predicate::str::contains("failed to generate"));
}

#[test]
fn unknown_contract_is_reported_not_panicked() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("user-service");

    archgen()
        .args([
            "generate",
            "User",
            "--contract",
            "com.nowhere.Ghost",
            "--param",
            "java.lang.String",
        ])
        .arg("--root")
        .arg(&root)
        .assert()
        .failure()
        .stdout(predicate::str::contains("com.nowhere.Ghost"))
        .stderr(predicate::str::contains("failed to generate"));
}

#[test]
fn missing_catalog_manifest_fails_before_generation() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("user-service");

    archgen()
        .args(["generate", "User"])
        .arg("--catalog")
        .arg(dir.path().join("no-such-catalog.toml"))
        .arg("--root")
        .arg(&root)
        .assert()
        .failure();

    assert!(!root.exists());
}

#[test]
fn broken_catalog_manifest_reports_configuration_error() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("catalog.toml");
    std::fs::write(&manifest, "[[types]]\nname = 42\n").unwrap();

    archgen()
        .args(["generate", "User"])
        .arg("--catalog")
        .arg(&manifest)
        .arg("--root")
        .arg(dir.path().join("user-service"))
        .assert()
        .failure()
        .code(4);
}

#[test]
fn quiet_and_verbose_conflict() {
    archgen()
        .args(["--quiet", "-v", "kinds"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unknown_subcommand_exits_2() {
    archgen()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(2);
}
