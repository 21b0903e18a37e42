//! Integration tests for the `variant-resolve` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;
use variant_resolve::test_utils::{DescriptorFixture, SettingsFixture};

fn variant_resolve() -> Command {
    let mut cmd = Command::cargo_bin("variant-resolve").unwrap();
    cmd.env_remove("RESOLVE_CONFIG").env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn descriptor(fixture: DescriptorFixture) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = fixture.write_to(temp.path()).unwrap();
    (temp, path)
}

#[test]
fn test_artifacts_lists_declared_artifacts() {
    let (_temp, path) = descriptor(DescriptorFixture::basic());

    variant_resolve()
        .arg("artifacts")
        .arg(&path)
        .args(["--variant", "runtimeElements"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib.jar"))
        .stdout(predicate::str::contains("build/libs/lib.jar"))
        .stdout(predicate::str::contains("1 artifact(s)"));
}

#[test]
fn test_artifacts_json_output() {
    let (_temp, path) = descriptor(DescriptorFixture::basic());

    let output = variant_resolve()
        .arg("artifacts")
        .arg(&path)
        .args(["--variant", "apiElements", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["file_name"], "lib-api.jar");
    assert_eq!(json[0]["component"], "project :lib");
}

#[test]
fn test_lookup_finds_artifact() {
    let (_temp, path) = descriptor(DescriptorFixture::with_graph_variants());

    variant_resolve()
        .arg("lookup")
        .arg(&path)
        .args(["--variant", "sourcesElements", "--artifact", "lib", "--classifier", "sources"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib-sources.jar"));
}

#[test]
fn test_lookup_missing_artifact_fails() {
    let (_temp, path) = descriptor(DescriptorFixture::basic());

    variant_resolve()
        .arg("lookup")
        .arg(&path)
        .args(["--variant", "runtimeElements", "--artifact", "docs", "--type", "zip"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Artifact 'docs.zip' not found"))
        .stderr(predicate::str::contains("artifacts"));
}

#[test]
fn test_resolve_with_override_selects_sources() {
    let (_temp, path) = descriptor(DescriptorFixture::with_graph_variants());

    variant_resolve()
        .arg("resolve")
        .arg(&path)
        .args(["--variant", "runtimeElements", "--attribute", "docs=sources"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib-sources.jar"))
        .stdout(predicate::str::contains("1 artifact(s)"));
}

#[test]
fn test_resolve_with_unknown_attribute_keeps_declared_variant() {
    let (_temp, path) = descriptor(DescriptorFixture::with_graph_variants());

    variant_resolve()
        .arg("resolve")
        .arg(&path)
        .args(["--variant", "runtimeElements", "--attribute", "extra=yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib.jar"))
        .stdout(predicate::str::contains("lib-sources.jar").not())
        .stdout(predicate::str::contains("1 artifact(s)"));
}

#[test]
fn test_resolve_unmatched_override_fails_unless_lenient() {
    let (temp, path) = descriptor(DescriptorFixture::with_graph_variants());

    variant_resolve()
        .arg("resolve")
        .arg(&path)
        .args(["--variant", "runtimeElements", "--attribute", "category=platform"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No variant of"));

    let settings = SettingsFixture::lenient().write_to(temp.path()).unwrap();
    variant_resolve()
        .arg("--config")
        .arg(&settings)
        .arg("resolve")
        .arg(&path)
        .args(["--variant", "runtimeElements", "--attribute", "category=platform"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib.jar"));
}

#[test]
fn test_resolve_with_exclusions() {
    let (_temp, path) = descriptor(DescriptorFixture::basic());

    variant_resolve()
        .arg("resolve")
        .arg(&path)
        .args(["--variant", "runtimeElements", "--exclude-artifact", "lib"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 artifact(s)"));

    variant_resolve()
        .arg("resolve")
        .arg(&path)
        .args(["--variant", "runtimeElements", "--exclude", "org.example:lib", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"variants\": []"));
}

#[test]
fn test_variants_shows_graph_traversal_candidates() {
    let (_temp, path) = descriptor(DescriptorFixture::with_graph_variants());

    variant_resolve()
        .arg("variants")
        .arg(&path)
        .args(["--variant", "runtimeElements"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graph traversal variants"))
        .stdout(predicate::str::contains("sourcesElements"))
        .stdout(predicate::str::contains("2 variant(s)"));

    let (_temp, path) = descriptor(DescriptorFixture::basic());
    variant_resolve()
        .arg("variants")
        .arg(&path)
        .args(["--variant", "runtimeElements"])
        .assert()
        .success()
        .stdout(predicate::str::contains("own variants"))
        .stdout(predicate::str::contains("1 variant(s)"));
}

#[test]
fn test_unknown_variant_and_bad_inputs_fail() {
    let (temp, path) = descriptor(DescriptorFixture::basic());

    variant_resolve()
        .arg("artifacts")
        .arg(&path)
        .args(["--variant", "javadocElements"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("runtimeElements, apiElements"));

    variant_resolve()
        .arg("artifacts")
        .arg(temp.path().join("missing.toml"))
        .args(["--variant", "runtimeElements"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    variant_resolve()
        .arg("artifacts")
        .arg(&path)
        .args(["--variant", "runtimeElements", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format 'yaml'"));

    let settings = SettingsFixture::invalid_shards().write_to(temp.path()).unwrap();
    variant_resolve()
        .env("RESOLVE_CONFIG", &settings)
        .arg("artifacts")
        .arg(&path)
        .args(["--variant", "runtimeElements"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shard_amount"));
}
