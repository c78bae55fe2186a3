//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE: &str =
    "foo:\n  bar: 4\n  moo:\n  - how\n  - are\n  - you\nbread:\n  butter: win\n  milk: fail\n";

fn sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("my.conf");
    fs::write(&path, SAMPLE).expect("write config");
    path
}

fn funconf() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("funconf"))
}

#[test]
fn test_cli_version() {
    funconf().arg("--version").assert().success().stdout(predicate::str::contains("funconf"));
}

#[test]
fn test_cli_help() {
    funconf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("kwargs"));
}

#[test]
fn test_show_renders_sections_with_banners() {
    let tmp = TempDir::new().expect("tmp");
    let path = sample(&tmp);
    funconf()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("#\n# Bread\n#\nbread:\n  butter: win\n  milk: fail\n"))
        .stdout(predicate::str::contains("foo:\n  bar: 4\n  moo:\n  - how\n"));
}

#[test]
fn test_show_applies_coerced_override() {
    let tmp = TempDir::new().expect("tmp");
    let path = sample(&tmp);
    funconf()
        .args(["show", "--set", "foo.bar=12", "--set", "foo.moo=a b"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("bar: 12"))
        .stdout(predicate::str::contains("moo:\n  - a\n  - b\n"));
}

#[test]
fn test_show_rejects_bad_override() {
    let tmp = TempDir::new().expect("tmp");
    let path = sample(&tmp);
    funconf()
        .args(["show", "--set", "foo.bar=twelve"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed applying override"));
}

#[test]
fn test_show_skips_missing_files() {
    let tmp = TempDir::new().expect("tmp");
    funconf().arg("show").arg(tmp.path().join("missing.yml")).assert().success().stdout("");
}

#[test]
fn test_show_reports_broken_yaml() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("broken.yml");
    fs::write(&path, "`empty:a df asd Z X324!~ 1").expect("write");
    funconf()
        .arg("show")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed loading"));
}

#[test]
fn test_get_prints_value() {
    let tmp = TempDir::new().expect("tmp");
    let path = sample(&tmp);
    funconf()
        .args(["get", "foo.moo", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("how are you\n");
}

#[test]
fn test_get_unknown_field_fails() {
    let tmp = TempDir::new().expect("tmp");
    let path = sample(&tmp);
    funconf()
        .args(["get", "foo.nope", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope not defined in foo"));
}

#[test]
fn test_kwargs_merges_overrides() {
    let tmp = TempDir::new().expect("tmp");
    let path = sample(&tmp);
    funconf()
        .args(["kwargs", "--set", "foo_bar=7", "--set", "extra=1"])
        .arg(&path)
        .assert()
        .success()
        .stdout("bread_butter=win\nbread_milk=fail\nextra=1\nfoo_bar=7\nfoo_moo=how are you\n");
}
