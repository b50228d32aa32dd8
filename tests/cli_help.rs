//! All subcommands have help.

use assert_cmd::Command;

fn spo_auth() -> Command {
    Command::cargo_bin("spo-auth").unwrap()
}

#[test]
fn help_main() {
    spo_auth().arg("--help").assert().success();
}

#[test]
fn help_anchor() {
    spo_auth().args(["anchor", "--help"]).assert().success();
}

#[test]
fn help_anchor_write() {
    spo_auth().args(["anchor", "write", "--help"]).assert().success();
}

#[test]
fn help_anchor_install() {
    spo_auth().args(["anchor", "install", "--help"]).assert().success();
}

#[test]
fn help_token() {
    spo_auth().args(["token", "--help"]).assert().success();
}

#[test]
fn help_token_password() {
    spo_auth().args(["token", "password", "--help"]).assert().success();
}

#[test]
fn help_token_secret() {
    spo_auth().args(["token", "secret", "--help"]).assert().success();
}

#[test]
fn help_token_certificate() {
    spo_auth()
        .args(["token", "certificate", "--help"])
        .assert()
        .success();
}
