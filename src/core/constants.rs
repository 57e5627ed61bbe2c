//! Constants used throughout soiree.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.soiree.toml).
pub const CONFIG_FILE: &str = ".soiree.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SOIREE_LOG";

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Folder listed when the caller names none.
pub const DEFAULT_FOLDER: &str = "images";

/// Folder backing the carousel section of the page.
pub const DEFAULT_CAROUSEL_FOLDER: &str = "carousel";

/// Folder backing the round portrait next to the carousel.
pub const DEFAULT_PORTRAIT_FOLDER: &str = "profile";

/// Key fragment that picks the portrait out of its folder.
pub const DEFAULT_PORTRAIT_KEY: &str = "circle-image.jpeg";

/// Alt text for the portrait when no image matched.
pub const DEFAULT_PORTRAIT_ALT: &str = "Circle image";

/// Signed URL lifetime in seconds (1 hour).
pub const DEFAULT_EXPIRES_IN: u64 = 3600;

/// Longest lifetime the S3 presigner accepts (7 days).
pub const MAX_EXPIRES_IN: u64 = 604_800;

/// Label used when a key yields no usable file stem.
pub const DEFAULT_ALT: &str = "Image";

/// Raster image extensions shown in the gallery (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Hex length of a SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Upper bound on list pages followed for one folder.
pub const MAX_LIST_PAGES: usize = 1000;

/// Credentials provider name reported to the AWS SDK.
pub const CREDENTIALS_PROVIDER: &str = "soiree-config";

/// Environment variable names overlaid on the config file.
pub mod env {
    pub const PASSWORD_HASH: &str = "SOIREE_PASSWORD_HASH";
    pub const AWS_REGION: &str = "SOIREE_AWS_REGION";
    pub const AWS_BUCKET_NAME: &str = "SOIREE_AWS_BUCKET_NAME";
    pub const AWS_ACCESS_KEY_ID: &str = "SOIREE_AWS_ACCESS_KEY_ID";
    pub const AWS_SECRET_ACCESS_KEY: &str = "SOIREE_AWS_SECRET_ACCESS_KEY";
    pub const S3_ENDPOINT_URL: &str = "SOIREE_S3_ENDPOINT_URL";
    pub const PUBLIC_BASE_URL: &str = "SOIREE_PUBLIC_BASE_URL";
    pub const MAP_EMBED_URL: &str = "SOIREE_MAP_EMBED_URL";
    pub const MAP_DIRECTIONS_URL: &str = "SOIREE_MAP_DIRECTIONS_URL";
}
