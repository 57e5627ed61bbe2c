//! Tests for `soiree unlock`.

use crate::support::*;

#[test]
fn test_unlock_correct() {
    let t = Test::gated("password");

    let output = t.unlock("password\n");
    assert_success(&output);
    assert_stdout_contains(&output, "access granted");
}

#[test]
fn test_unlock_incorrect() {
    let t = Test::gated("password");

    let output = t.unlock("hunter2\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "incorrect passphrase");
    assert_stderr_contains(&output, "try again");
}

#[test]
fn test_unlock_no_normalization() {
    let t = Test::gated("password");

    for candidate in ["Password\n", "PASSWORD\n", " password\n", "password \n"] {
        let output = t.unlock(candidate);
        assert_failure(&output);
        assert_stderr_contains(&output, "incorrect passphrase");
    }
}

#[test]
fn test_unlock_never_echoes_passphrase() {
    let t = Test::gated("password");

    let output = t
        .cmd()
        .args(["--verbose", "unlock", "--stdin"])
        .write_stdin("hunter2-plaintext\n")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_output_excludes(&output, "hunter2-plaintext");
}

#[test]
fn test_unlock_without_digest() {
    let t = Test::new();

    let output = t.unlock("password\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing config value: gate.digest");
    assert_stderr_contains(&output, "soiree hash");
}

#[test]
fn test_unlock_rejects_overlong_digest() {
    let t = Test::with_config(&format!("[gate]\ndigest = \"{}ab\"\n", PASSWORD_DIGEST));

    let output = t.unlock("password\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid gate.digest");
}

#[test]
fn test_unlock_example_digest_is_not_password() {
    let t = Test::with_config(&format!("[gate]\ndigest = \"{}\"\n", EXAMPLE_DIGEST));

    let output = t.unlock("password\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "incorrect passphrase");
}

#[test]
fn test_unlock_digest_from_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SOIREE_PASSWORD_HASH", PASSWORD_DIGEST)
        .args(["unlock", "--stdin"])
        .write_stdin("password\n")
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_unlock_empty_rejected() {
    let t = Test::gated("password");

    let output = t.unlock("\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "passphrase cannot be empty");
}
