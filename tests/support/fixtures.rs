//! Test fixtures and constants.

/// SHA-256 of "password".
pub const PASSWORD_DIGEST: &str =
    "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

/// A well-formed digest that is not the digest of "password".
pub const EXAMPLE_DIGEST: &str =
    "aa0e55628c0edd6f1185c497011fdd3b2692e3fa068d383767d70cfca4467cbc";

/// A carousel listing with one non-image and one folder marker.
pub const CAROUSEL_KEYS: &[&str] = &[
    "carousel/a.jpg",
    "carousel/b.png",
    "carousel/readme.txt",
    "carousel/",
];

/// Environment variables the binary reads; cleared for every test command.
pub const SOIREE_ENV: &[&str] = &[
    "SOIREE_LOG",
    "SOIREE_PASSWORD_HASH",
    "SOIREE_AWS_REGION",
    "SOIREE_AWS_BUCKET_NAME",
    "SOIREE_AWS_ACCESS_KEY_ID",
    "SOIREE_AWS_SECRET_ACCESS_KEY",
    "SOIREE_S3_ENDPOINT_URL",
    "SOIREE_PUBLIC_BASE_URL",
    "SOIREE_MAP_EMBED_URL",
    "SOIREE_MAP_DIRECTIONS_URL",
];

/// An endpoint nothing listens on.
pub const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";
