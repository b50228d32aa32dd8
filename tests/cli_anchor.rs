//! Anchor CLI commands end to end.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const CERT: &str = "-----BEGIN CERTIFICATE-----\nMIIBfake\n-----END CERTIFICATE-----\n";

fn spo_auth() -> Command {
    Command::cargo_bin("spo-auth").unwrap()
}

#[test]
fn anchor_write_copies_certificate_to_dest() {
    let dir = common::temp_workdir();
    let src = dir.path().join("source.pem");
    let dest = dir.path().join("ca.crt");
    fs::write(&src, CERT).unwrap();

    spo_auth()
        .args(["anchor", "write"])
        .arg(&src)
        .arg("--dest")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Certificate:"))
        .stdout(predicate::str::contains("Wrote anchor:"));

    assert_eq!(fs::read_to_string(&dest).unwrap(), CERT);
}

#[test]
fn anchor_show_prints_description_without_writing() {
    let dir = common::temp_workdir();
    let src = dir.path().join("source.pem");
    let dest = dir.path().join("ca.crt");
    fs::write(&src, CERT).unwrap();

    spo_auth()
        .args(["anchor", "show"])
        .arg(&src)
        .arg("--dest")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("File"));

    assert!(!dest.exists());
}

#[test]
fn anchor_write_missing_source_fails() {
    let dir = common::temp_workdir();
    let missing = dir.path().join("nope.pem");

    spo_auth()
        .args(["anchor", "write"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("read certificate"));
}
