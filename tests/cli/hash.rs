//! Tests for `soiree hash`.

use crate::support::*;

#[test]
fn test_hash_argument() {
    let t = Test::new();

    let output = t.hash("password");
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), PASSWORD_DIGEST);
}

#[test]
fn test_hash_stdin_strips_only_newline() {
    let t = Test::new();

    let output = t.hash_stdin("password\n");
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), PASSWORD_DIGEST);

    let output = t.hash_stdin("password \n");
    assert_success(&output);
    assert_ne!(stdout(&output).trim(), PASSWORD_DIGEST);
}

#[test]
fn test_hash_prints_config_hint() {
    let t = Test::new();

    let output = t.hash("password");
    assert_success(&output);
    assert_stderr_contains(&output, "SOIREE_PASSWORD_HASH");
}

#[test]
fn test_hash_empty_rejected() {
    let t = Test::new();

    let output = t.hash_stdin("\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "passphrase cannot be empty");
}

#[test]
fn test_hash_output_unlocks() {
    let t = Test::new();

    let output = t.hash("correct horse battery staple");
    assert_success(&output);
    let digest = stdout(&output).trim().to_string();

    t.write_config(&format!("[gate]\ndigest = \"{}\"\n", digest));
    let output = t.unlock("correct horse battery staple\n");
    assert_success(&output);
}
