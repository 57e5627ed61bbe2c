//! Configuration loading.
//!
//! Reads an optional `.soiree.toml`, then overlays `SOIREE_*` environment
//! variables. Every value is optional at load time; operations that need a
//! value (the gate needs a digest, storage needs a bucket) ask for it and get
//! `ConfigError::MissingField` when it is absent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::constants::{self, env};
use crate::core::gate::{Gate, SecretDigest};
use crate::core::types::{Folder, HexDigest};
use crate::error::{ConfigError, Result};

/// Project configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub event: EventConfig,
    #[serde(default)]
    pub map: MapConfig,
}

/// Passphrase gate settings.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    /// SHA-256 of the passphrase, 64 hex characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<HexDigest>,
}

/// Object storage settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    /// S3-compatible endpoint (path-style addressing is used when set)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    /// Base for public URLs, e.g. a CDN domain in front of the bucket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_base_url: Option<String>,
    /// Per-operation timeout for storage calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Static credentials for the storage backend.
#[derive(Clone, Copy)]
pub struct StaticCredentials<'a> {
    pub access_key_id: &'a str,
    pub secret_access_key: &'a str,
}

/// Folders and URL lifetime for the page's gallery sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryConfig {
    #[serde(default = "default_carousel_folder")]
    pub carousel_folder: Folder,
    #[serde(default = "default_portrait_folder")]
    pub portrait_folder: Folder,
    /// Key fragment identifying the portrait inside its folder
    #[serde(default = "default_portrait_key")]
    pub portrait_key: String,
    /// Shown when no portrait matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_fallback_url: Option<String>,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

/// Event details shown on the info card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Map links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
    /// Address of the embeddable map frame
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    /// "Open in maps" deep link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directions_url: Option<String>,
}

fn default_region() -> String {
    constants::DEFAULT_REGION.to_string()
}

fn default_carousel_folder() -> Folder {
    constants::DEFAULT_CAROUSEL_FOLDER.to_string()
}

fn default_portrait_folder() -> Folder {
    constants::DEFAULT_PORTRAIT_FOLDER.to_string()
}

fn default_portrait_key() -> String {
    constants::DEFAULT_PORTRAIT_KEY.to_string()
}

fn default_expires_in() -> u64 {
    constants::DEFAULT_EXPIRES_IN
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            bucket: None,
            access_key_id: None,
            secret_access_key: None,
            endpoint_url: None,
            public_base_url: None,
            timeout_secs: None,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            carousel_folder: default_carousel_folder(),
            portrait_folder: default_portrait_folder(),
            portrait_key: default_portrait_key(),
            portrait_fallback_url: None,
            expires_in: default_expires_in(),
        }
    }
}

// The secret access key stays out of logs and panics.
impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field("endpoint_url", &self.endpoint_url)
            .field("public_base_url", &self.public_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl StorageConfig {
    /// Bucket name, required for any storage operation.
    pub fn bucket(&self) -> Result<&str> {
        self.bucket
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField { field: "storage.bucket" }.into())
    }

    /// Static credentials, only when both halves are configured.
    pub fn credentials(&self) -> Option<StaticCredentials<'_>> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(id), Some(secret)) => Some(StaticCredentials {
                access_key_id: id,
                secret_access_key: secret,
            }),
            _ => None,
        }
    }

    /// Base URL objects are reachable under when the bucket is public-read.
    ///
    /// `public_base_url` wins; a custom endpoint is addressed path-style as
    /// `{endpoint}/{bucket}`; otherwise the AWS virtual-hosted form is used.
    pub fn public_base(&self) -> Result<String> {
        if let Some(base) = &self.public_base_url {
            return Ok(base.trim_end_matches('/').to_string());
        }
        if let Some(endpoint) = &self.endpoint_url {
            return Ok(format!(
                "{}/{}",
                endpoint.trim_end_matches('/'),
                self.bucket()?
            ));
        }
        Ok(format!(
            "https://{}.s3.{}.amazonaws.com",
            self.bucket()?,
            self.region
        ))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Path of the config file in the current directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load from `path` (or `.soiree.toml`) and the process environment.
    ///
    /// A missing default file is fine; a missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile`, `ConfigError::Parse`, or a validation
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        let mut config = if path.exists() || required {
            debug!(path = %path.display(), "loading config");
            let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
            Self::parse(&contents)?
        } else {
            debug!("no config file, using defaults");
            Self::default()
        };

        config.apply_env(lookup);
        config.validate()?;

        debug!(
            bucket = config.storage.bucket.as_deref().unwrap_or("-"),
            region = %config.storage.region,
            gate = config.gate.digest.is_some(),
            "config loaded"
        );

        Ok(config)
    }

    /// Parse TOML without environment overlay or validation.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents).map_err(ConfigError::Parse)?)
    }

    /// Overlay environment variables. Empty values count as unset.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(env::PASSWORD_HASH) {
            self.gate.digest = Some(v);
        }
        if let Some(v) = get(env::AWS_REGION) {
            self.storage.region = v;
        }
        if let Some(v) = get(env::AWS_BUCKET_NAME) {
            self.storage.bucket = Some(v);
        }
        if let Some(v) = get(env::AWS_ACCESS_KEY_ID) {
            self.storage.access_key_id = Some(v);
        }
        if let Some(v) = get(env::AWS_SECRET_ACCESS_KEY) {
            self.storage.secret_access_key = Some(v);
        }
        if let Some(v) = get(env::S3_ENDPOINT_URL) {
            self.storage.endpoint_url = Some(v);
        }
        if let Some(v) = get(env::PUBLIC_BASE_URL) {
            self.storage.public_base_url = Some(v);
        }
        if let Some(v) = get(env::MAP_EMBED_URL) {
            self.map.embed_url = Some(v);
        }
        if let Some(v) = get(env::MAP_DIRECTIONS_URL) {
            self.map.directions_url = Some(v);
        }
    }

    /// Validate values that are present.
    ///
    /// Checks:
    /// - Gate digest is 64 hex characters
    /// - Expiry is within the presigner's range
    /// - Storage timeout is non-zero
    /// - Map and endpoint URLs use http(s)
    ///
    /// A lone credential half is not an error: it is ignored with a warning
    /// and storage runs in public mode.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if let Some(digest) = &self.gate.digest {
            SecretDigest::parse(digest)?;
        }

        let expires_in = self.gallery.expires_in;
        if expires_in == 0 || expires_in > constants::MAX_EXPIRES_IN {
            return Err(ConfigError::InvalidValue {
                field: "gallery.expires_in",
                reason: format!(
                    "{} is outside 1..={}",
                    expires_in,
                    constants::MAX_EXPIRES_IN
                ),
            }
            .into());
        }

        if self.storage.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "storage.timeout_secs",
                reason: "must be at least 1 second".to_string(),
            }
            .into());
        }

        if self.storage.region.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.region",
                reason: "empty".to_string(),
            }
            .into());
        }

        validate_url("map.embed_url", self.map.embed_url.as_deref())?;
        validate_url("map.directions_url", self.map.directions_url.as_deref())?;
        validate_url("storage.endpoint_url", self.storage.endpoint_url.as_deref())?;
        validate_url(
            "storage.public_base_url",
            self.storage.public_base_url.as_deref(),
        )?;

        if self.storage.access_key_id.is_some() != self.storage.secret_access_key.is_some() {
            warn!("only one of access key id / secret access key is set; using public urls");
        }

        Ok(())
    }

    /// Build the passphrase gate from the configured digest.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if no digest is configured.
    pub fn gate(&self) -> Result<Gate> {
        let digest = self
            .gate
            .digest
            .as_deref()
            .ok_or(ConfigError::MissingField { field: "gate.digest" })?;
        Ok(Gate::new(SecretDigest::parse(digest)?))
    }
}

fn validate_url(field: &'static str, value: Option<&str>) -> Result<()> {
    match value {
        Some(url) if !(url.starts_with("https://") || url.starts_with("http://")) => {
            Err(ConfigError::InvalidValue {
                field,
                reason: format!("not an http(s) url: {}", url),
            }
            .into())
        }
        _ => Ok(()),
    }
}
