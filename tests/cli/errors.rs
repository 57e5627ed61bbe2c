//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    for command in ["hash", "unlock", "images", "page", "status"] {
        assert!(out.contains(command), "help missing {}", command);
    }
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "soiree");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "soiree");
}

#[test]
fn test_malformed_config_reports_parse_error() {
    let t = Test::with_config("[storage\nbucket = ");

    let output = t.status();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config file");
}

#[test]
fn test_explicit_missing_config_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--config", "does-not-exist.toml", "status"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read config file");
}

#[test]
fn test_bad_map_url_rejected() {
    let t = Test::with_config("[map]\nembed_url = \"ftp://maps.example.com\"\n");

    let output = t.status();
    assert_failure(&output);
    assert_stderr_contains(&output, "map.embed_url");
}
