//! End-to-end tests of the command line tool.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn tool(prefs: &Path) -> Command {
    let mut cmd = Command::cargo_bin("android_build_pipeline").expect("binary");
    cmd.env_remove("ABP_KEYSTORE_PASS")
        .env_remove("ABP_KEYALIAS_PASS")
        .env("ABP_PREFS_FILE", prefs)
        .arg("--manifest")
        .arg(fixture("Android.toml"));
    cmd
}

#[test]
fn show_prints_defaults_from_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");

    tool(&prefs)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("{package}_{date}"))
        .stdout(predicate::str::contains("user.keystore"));

    assert!(!prefs.exists(), "show must not write preferences");
}

#[test]
fn set_then_show_masks_passwords() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");

    tool(&prefs)
        .args(["set", "--keystore-pass", "hunter2", "--use-keystore", "true"])
        .assert()
        .success();

    let raw = std::fs::read_to_string(&prefs).expect("prefs written");
    assert!(!raw.contains("hunter2"));

    tool(&prefs)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn keystore_password_can_come_from_environment() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");

    tool(&prefs)
        .env("ABP_KEYSTORE_PASS", "from-env")
        .args(["set", "--keystore-name", "ci.keystore"])
        .assert()
        .success();

    let raw = std::fs::read_to_string(&prefs).expect("prefs written");
    assert!(raw.contains("ZnJvbS1lbnY="));
    assert!(raw.contains("ci.keystore"));
}

#[test]
fn file_name_uses_template_and_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");

    tool(&prefs)
        .args([
            "set",
            "--name-format",
            "{name}-{version}-{bundle}-{unknown}",
            "--app-bundle",
            "false",
        ])
        .assert()
        .success();

    tool(&prefs)
        .arg("file-name")
        .assert()
        .success()
        .stdout("Game-1.2.0-42-{unknown}.apk\n");
}

#[test]
fn file_name_defaults_to_app_bundle_from_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");

    tool(&prefs)
        .args(["set", "--name-format", "{package}", "--build-path", "out"])
        .assert()
        .success();

    tool(&prefs)
        .args(["file-name", "--output-path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("com.example.game.aab"))
        .stdout(predicate::str::starts_with("out"));
}

#[test]
fn clearing_keystore_name_removes_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");

    tool(&prefs)
        .args(["set", "--keystore-name", "custom.keystore"])
        .assert()
        .success();
    tool(&prefs)
        .args(["set", "--keystore-name", ""])
        .assert()
        .success();

    let raw = std::fs::read_to_string(&prefs).expect("prefs written");
    assert!(!raw.contains("keystorename"));

    // Falls back to the manifest default again
    tool(&prefs)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("user.keystore"));
}

#[test]
fn set_without_values_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");

    tool(&dir.path().join("prefs.json"))
        .arg("set")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to set"));
}

#[test]
fn invalid_build_option_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");

    tool(&dir.path().join("prefs.json"))
        .args(["set", "--build-options", "Turbo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid build option"));
}

#[test]
fn corrupt_password_fails_with_hint() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");
    std::fs::write(
        &prefs,
        r#"{ "buildpipeline.android.keyaliaspass": "***" }"#,
    )
    .expect("write prefs");

    tool(&prefs)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("buildpipeline.android.keyaliaspass"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn file_name_requires_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");

    Command::cargo_bin("android_build_pipeline")
        .expect("binary")
        .env("ABP_PREFS_FILE", dir.path().join("prefs.json"))
        .args(["--manifest"])
        .arg(dir.path().join("missing.toml"))
        .arg("file-name")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--manifest"));
}

#[test]
fn missing_manifest_warns_and_falls_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.toml");

    Command::cargo_bin("android_build_pipeline")
        .expect("binary")
        .env("ABP_PREFS_FILE", dir.path().join("prefs.json"))
        .arg("--manifest")
        .arg(&missing)
        .arg("show")
        .assert()
        .success()
        .stderr(predicate::str::contains("Manifest not found"))
        .stdout(predicate::str::contains("{package}_{date}"));

    Command::cargo_bin("android_build_pipeline")
        .expect("binary")
        .env("ABP_PREFS_FILE", dir.path().join("prefs.json"))
        .arg("--manifest")
        .arg(&missing)
        .args(["-q", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Manifest not found").not());
}

#[test]
fn namespace_and_host_default_path_flags_reach_the_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");

    tool(&prefs)
        .args(["--namespace", "studio.game.", "--host-default-path", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("builds/android"));

    tool(&prefs)
        .args([
            "--namespace",
            "studio.game.",
            "--host-default-path",
            "set",
            "--use-keystore",
            "true",
        ])
        .assert()
        .success();

    let raw = std::fs::read_to_string(&prefs).expect("prefs written");
    assert!(raw.contains("studio.game.buildpath"));
    assert!(raw.contains("studio.game.usekeystore"));
    assert!(raw.contains("builds/android"));
    assert!(!raw.contains("buildpipeline.android."));

    // Default namespace sees none of it, and no host path without the flag
    tool(&prefs)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("builds/android").not());
}
