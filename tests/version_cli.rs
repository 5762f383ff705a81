//! Integration tests driving the installed `lark-version` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use version::AbiVersion;

fn lark_version() -> Command {
    Command::cargo_bin("lark-version").expect("lark-version binary must be available")
}

#[test]
fn bare_invocation_prints_the_banner() {
    lark_version()
        .assert()
        .success()
        .stdout(predicate::str::contains("runtime version"))
        .stdout(predicate::str::contains("snapshot hash:"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn banner_matches_the_canonical_report() {
    let expected = version::VersionReport::current().human_readable();

    lark_version().assert().success().stdout(expected);
}

#[test]
fn in_window_request_is_honoured() {
    let oldest = AbiVersion::OLDEST_SUPPORTED.as_u32().to_string();

    lark_version()
        .args(["--use-abi-version", oldest.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("target {oldest}")));
}

#[test]
fn out_of_window_request_resolves_to_current_without_failing() {
    lark_version()
        .args(["--use-abi-version", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "target {}",
            AbiVersion::CURRENT
        )))
        .stderr(predicate::str::is_empty());
}

#[test]
fn json_output_round_trips_the_identity_facts() {
    let output = lark_version().arg("--json").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).expect("UTF-8 output");

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["snapshot_hash"], version::snapshot_hash());
    assert_eq!(json["commit"], version::commit_string());
    assert_eq!(
        json["abi"]["oldest_supported"],
        u64::from(AbiVersion::OLDEST_SUPPORTED.as_u32())
    );
}

#[test]
fn help_documents_the_supported_window() {
    lark_version()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Valid values are {} to {}.",
            AbiVersion::OLDEST_SUPPORTED,
            AbiVersion::CURRENT
        )));
}

#[test]
fn non_numeric_abi_request_fails_with_a_diagnostic() {
    lark_version()
        .args(["--use-abi-version", "newest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lark-version:"));
}
