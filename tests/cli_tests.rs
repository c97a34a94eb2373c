mod common;

use account_ledger::{config::Config, ledger::RejectionPolicy};
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("account_ledger_cli").unwrap();
    cmd.env("ACCOUNT_LEDGER_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn demo_prints_account_report() {
    let home = common::temp_home();
    cli(home.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("=== Account Manager ==="))
        .stdout(contains("Account ID: 1\nName: Alice Smith\nBalance: $1050.00\n"))
        .stdout(contains("Account ID: 2\nName: Bob Jones\nBalance: $500.00\n"))
        .stdout(contains("Total accounts created: 2"))
        .stdout(contains("Type:").not());
}

#[test]
fn detailed_demo_shows_types_and_rejection() {
    let home = common::temp_home();
    cli(home.path())
        .args(["demo", "--detailed"])
        .assert()
        .success()
        .stdout(contains("Type: Savings"))
        .stdout(contains("Type: Checking"))
        .stdout(contains("WARNING: Withdrawal rejected: Insufficient funds"));
}

#[test]
fn silent_config_suppresses_rejection_warning() {
    let home = common::temp_home();
    common::write_config(
        home.path(),
        &Config {
            rejection_policy: RejectionPolicy::Silent,
            ..Config::default()
        },
    );
    cli(home.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("Withdrawal rejected").not());
}

#[test]
fn json_demo_serializes_accounts() {
    let home = common::temp_home();
    let output = cli(home.path())
        .args(["demo", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["name"], "Alice Smith");
    assert_eq!(value[0]["kind"]["type"], "Savings");
    assert_eq!(value[1]["kind"]["overdraft_limit"], 500.0);
}

#[test]
fn version_prints_build_summary() {
    let home = common::temp_home();
    cli(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(contains("account_ledger"));
}

#[test]
fn unknown_command_fails_with_usage() {
    let home = common::temp_home();
    cli(home.path())
        .arg("explode")
        .assert()
        .failure()
        .stderr(contains("unknown command `explode`"))
        .stderr(contains("Usage: account_ledger_cli"));
}

#[test]
fn config_command_prints_effective_config() {
    let home = common::temp_home();
    cli(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Config file:"))
        .stdout(contains("\"name_max_chars\": 49"))
        .stdout(contains("\"rejection_policy\": \"strict\""));
}
