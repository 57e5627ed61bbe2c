//! Tests for `soiree images`.

use crate::support::*;

#[test]
fn test_images_requires_bucket() {
    let t = Test::new();

    let output = t.images("carousel");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing config value: storage.bucket");
}

#[test]
fn test_images_rejects_zero_expiry() {
    let t = Test::with_config("[storage]\nbucket = \"party\"\n");

    let output = t
        .cmd()
        .args(["images", "carousel", "--expires-in", "0"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid expiry");
}

#[test]
fn test_images_rejects_expiry_over_a_week() {
    let t = Test::with_config("[storage]\nbucket = \"party\"\n");

    let output = t
        .cmd()
        .args(["images", "carousel", "--expires-in", "604801"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid expiry");
}

#[test]
fn test_images_listing_failure_is_an_error() {
    let t = Test::with_config(&format!(
        r#"
[storage]
bucket = "party"
endpoint_url = "{}"
timeout_secs = 5
"#,
        DEAD_ENDPOINT
    ));

    let output = t.images("carousel");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to list images");
    assert!(stdout(&output).is_empty(), "no partial listing expected");
}
