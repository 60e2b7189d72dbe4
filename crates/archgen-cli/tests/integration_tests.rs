//! End-to-end tests for the archgen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn archgen() -> Command {
    let mut cmd = Command::cargo_bin("archgen").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn help_lists_subcommands() {
    archgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("kinds"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_cargo_metadata() {
    archgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    Command::cargo_bin("archgen")
        .unwrap()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn kinds_table_marks_generated_and_structural() {
    archgen()
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("contract"))
        .stdout(predicate::str::contains("generated"))
        .stdout(predicate::str::contains("structural"));
}

#[test]
fn kinds_list_is_one_name_per_line() {
    archgen()
        .args(["kinds", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source-root\n"))
        .stdout(predicate::str::contains("implementation\n"));
}

#[test]
fn kinds_json_is_parseable() {
    let output = archgen()
        .args(["kinds", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 12);
    assert!(entries.iter().any(|e| {
        e["name"] == "contract" && e["generated"] == true
    }));
    assert!(entries.iter().any(|e| {
        e["name"] == "root" && e["generated"] == false
    }));
}

#[test]
fn generate_writes_a_full_project() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("user-service");

    archgen()
        .args(["generate", "User", "--package", "com.acme.user"])
        .arg("--root")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 7 file(s)"));

    assert!(root.join("build.gradle").is_file());
    assert!(root.join("settings.gradle").is_file());
    assert!(root.join(".gitignore").is_file());
    assert!(
        root.join("src/main/java/com/acme/user/service/UserService.java")
            .is_file()
    );
    assert!(
        root.join("src/main/java/com/acme/user/service/DefaultUserService.java")
            .is_file()
    );
    assert!(root.join("src/main/java/com/acme/user/UserApp.java").is_file());
    assert!(root.join("src/main/resources/application.properties").is_file());

    let contract = std::fs::read_to_string(
        root.join("src/main/java/com/acme/user/service/UserService.java"),
    )
    .unwrap();
    assert!(contract.contains("package com.acme.user.service;"));
    assert!(contract.contains("public interface UserService extends BaseService<String>"));
}

#[test]
fn generate_alias_g_works() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("order-service");

    archgen()
        .args(["g", "Order", "--package", "com.acme.order"])
        .arg("--root")
        .arg(&root)
        .assert()
        .success();

    assert!(root.join("build.gradle").is_file());
}

#[test]
fn dry_run_creates_nothing_on_disk() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("user-service");

    archgen()
        .args(["generate", "User", "--package", "com.acme.user", "--dry-run"])
        .arg("--root")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("UserService.java"));

    assert!(!root.exists());
}

#[test]
fn force_regenerates_over_an_existing_project() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("user-service");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("stale.txt"), "leftover").unwrap();

    archgen()
        .args(["generate", "User", "--package", "com.acme.user", "--force"])
        .arg("--root")
        .arg(&root)
        .assert()
        .success();

    // The old contents were cleaned before regeneration.
    assert!(!root.join("stale.txt").exists());
    assert!(root.join("build.gradle").is_file());
}

#[test]
fn quiet_mode_suppresses_normal_output() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("user-service");

    archgen()
        .args(["--quiet", "generate", "User", "--package", "com.acme.user"])
        .arg("--root")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(root.join("build.gradle").is_file());
}

#[test]
fn completions_emit_bash_script() {
    archgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("archgen"))
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn custom_catalog_manifest_is_honored() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("catalog.toml");
    std::fs::write(
        &manifest,
        r#"
[[types]]
name = "com.acme.Repository"
type_params = ["T"]

[[types.methods]]
name = "store"
return_type = { Concrete = "void" }
parameters = [{ name = "item", ty = { Variable = "T" } }]
"#,
    )
    .unwrap();

    let root = dir.path().join("user-service");
    archgen()
        .args([
            "generate",
            "User",
            "--package",
            "com.acme.user",
            "--contract",
            "com.acme.Repository",
            "--param",
            "java.lang.String",
        ])
        .arg("--catalog")
        .arg(&manifest)
        .arg("--root")
        .arg(&root)
        .assert()
        .success();

    let contract = std::fs::read_to_string(
        root.join("src/main/java/com/acme/user/service/UserService.java"),
    )
    .unwrap();
    assert!(contract.contains("extends Repository<String>"));

    let implementation = std::fs::read_to_string(
        root.join("src/main/java/com/acme/user/service/DefaultUserService.java"),
    )
    .unwrap();
    assert!(implementation.contains("public void store(String item)"));
}
