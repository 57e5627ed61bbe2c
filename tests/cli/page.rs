//! Tests for `soiree page`.

use crate::support::*;

#[test]
fn test_page_gate_runs_first() {
    // No bucket configured: a wrong passphrase must fail before storage is touched.
    let t = Test::gated("password");

    let output = t.page("wrong\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "incorrect passphrase");
    assert!(!stderr(&output).contains("storage.bucket"));
}

#[test]
fn test_page_after_unlock_needs_bucket() {
    let t = Test::gated("password");

    let output = t.page("password\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing config value: storage.bucket");
}

#[test]
fn test_page_requires_digest() {
    let t = Test::with_config("[storage]\nbucket = \"party\"\n");

    let output = t.page("password\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "gate.digest");
}

#[test]
fn test_page_sections_fail_independently_of_exit_code() {
    // Both folders fail to list; the page itself still renders.
    let t = Test::with_config(&format!(
        r#"
[gate]
digest = "{}"

[storage]
bucket = "party"
endpoint_url = "{}"
timeout_secs = 5

[event]
title = "Birthday"
address = "12 Garden Street"

[gallery]
portrait_fallback_url = "https://cdn.example.com/me.jpg"
"#,
        PASSWORD_DIGEST, DEAD_ENDPOINT
    ));

    let output = t
        .cmd()
        .args(["page", "--stdin", "--json"])
        .write_stdin("password\n")
        .output()
        .unwrap();
    assert_success(&output);

    let manifest: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(manifest["event"]["title"], "Birthday");
    assert_eq!(manifest["carousel"]["status"], "failed");
    assert_eq!(manifest["portrait"]["url"], "https://cdn.example.com/me.jpg");
    assert_eq!(manifest["portrait"]["alt"], "Circle image");
}
