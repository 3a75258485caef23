//! Exit codes and error messages.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn generator(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("textbringer-plugin-generator").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("HOME", home.path())
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn invalid_plugin_name_is_user_error() {
    let home = TempDir::new().unwrap();
    generator(&home)
        .args(["new", "../evil", "-o"])
        .arg(home.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid plugin name"));

    assert!(!home.path().join("evil").exists());
}

#[test]
fn missing_name_is_usage_error() {
    let home = TempDir::new().unwrap();
    generator(&home).arg("new").assert().code(2);
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let home = TempDir::new().unwrap();
    generator(&home)
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("frobnicate"));
}

#[test]
fn missing_config_file_exits_with_four() {
    let home = TempDir::new().unwrap();
    generator(&home)
        .args(["--config"])
        .arg(home.path().join("nope.toml"))
        .arg("version")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn malformed_config_file_exits_with_four() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    std::fs::write(&config, "[defaults\nlicense =").unwrap();

    generator(&home)
        .arg("--config")
        .arg(&config)
        .arg("version")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn verbose_and_quiet_conflict() {
    let home = TempDir::new().unwrap();
    generator(&home)
        .args(["-v", "--quiet", "version"])
        .assert()
        .code(2);
}

#[test]
fn unwritable_output_exits_with_one_and_names_path() {
    let home = TempDir::new().unwrap();
    let blocker = home.path().join("plainfile");
    std::fs::write(&blocker, "not a directory").unwrap();

    generator(&home)
        .args(["new", "x", "--author", "Ada", "--email", "ada@example.com", "-o"])
        .arg(&blocker)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to create directory"))
        .stderr(predicate::str::contains("textbringer-x"))
        .stderr(predicate::function(|err: &str| {
            err.matches("Failed to create directory").count() == 1
        }));
}
