//! Runs the `deploy` binary with a given environment and checks that every
//! failure, including bad configuration, ends the process with exit code 1.

use std::process::{Command, Output};

fn deploy(env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_deploy"))
        .env_clear()
        .env("LOG_FILTER", "off")
        .envs(env.iter().copied())
        .output()
        .unwrap()
}

#[test]
fn malformed_private_keys_exit_with_one() {
    let output = deploy(&[("PRIVATE_KEYS", "0x1234")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn malformed_confirmation_timeout_exits_with_one() {
    let output = deploy(&[("CONFIRMATION_TIMEOUT", "soon")]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn malformed_node_url_exits_with_one() {
    let output = deploy(&[("NODE_URL", "not a url")]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unreachable_node_exits_with_one() {
    let output = deploy(&[("NODE_URL", "http://127.0.0.1:1")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not connect to the node"));
}

#[test]
fn help_exits_with_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_deploy"))
        .arg("--help")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--private-keys"));
}
