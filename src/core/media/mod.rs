//! Gallery image listing and url resolution.
//!
//! [`MediaLister::fetch`] turns a folder into display-ready [`ImageRef`]s:
//! list every key under the folder, keep the images, label them, and give
//! each a url. Listing failure fails the call; a key that cannot be signed
//! is logged and left out.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::StorageConfig;
use crate::core::constants::MAX_EXPIRES_IN;
use crate::core::storage::{list_all, ObjectStore};
use crate::core::types::ObjectKey;
use crate::error::{Result, StorageError};

pub mod cache;
mod filter;

pub use cache::CachedLister;
pub use filter::{alt_label, image_keys, is_image_key};

/// An image ready for display.
///
/// Built fresh on every fetch. A signed `url` must not be used past
/// `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub key: ObjectKey,
    pub url: String,
    pub alt: String,
    /// `None` for permanent public urls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ImageRef {
    /// Whether the url is still usable at `now`.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}

/// How keys become urls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlMode {
    /// Permanent `{base}/{key}` urls, no network call
    Public { base: String },
    /// Presigned GET urls from the store
    Signed,
}

impl UrlMode {
    /// Signed when static credentials are configured, public otherwise.
    ///
    /// # Errors
    ///
    /// Public mode needs a bucket (or a public base url) to build urls from.
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        if config.credentials().is_some() {
            Ok(Self::Signed)
        } else {
            Ok(Self::Public {
                base: config.public_base()?,
            })
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Public { .. } => "public",
            Self::Signed => "signed",
        }
    }
}

/// Permanent url for `key` under `base`.
///
/// The key is joined verbatim, not percent-encoded: keys are expected to be
/// url-safe already, and `carousel/my photo.jpg` yields a url with a space.
pub fn public_url(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key)
}

/// Validate a url lifetime in seconds.
///
/// # Errors
///
/// Returns `StorageError::InvalidExpiry` outside `1..=604800`.
pub fn expiry(seconds: u64) -> Result<Duration> {
    if seconds == 0 || seconds > MAX_EXPIRES_IN {
        return Err(StorageError::InvalidExpiry(seconds).into());
    }
    Ok(Duration::from_secs(seconds))
}

/// Lists a folder and resolves its images to urls.
#[derive(Clone)]
pub struct MediaLister {
    store: Arc<dyn ObjectStore>,
    mode: UrlMode,
}

impl MediaLister {
    pub fn new(store: Arc<dyn ObjectStore>, mode: UrlMode) -> Self {
        Self { store, mode }
    }

    pub fn mode(&self) -> &UrlMode {
        &self.mode
    }

    pub fn bucket(&self) -> &str {
        self.store.bucket()
    }

    /// Fetch the images under `folder`.
    ///
    /// Order follows the backend's listing order. Signing runs concurrently
    /// for all keys; keys that fail to sign are dropped.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidExpiry` for a bad lifetime and
    /// `StorageError::Listing` if the folder could not be listed.
    pub async fn fetch(&self, folder: &str, expires_in: Duration) -> Result<Vec<ImageRef>> {
        expiry(expires_in.as_secs())?;

        let keys = image_keys(list_all(self.store.as_ref(), folder).await?);
        debug!(folder, images = keys.len(), mode = self.mode.name(), "resolving urls");

        let images = match &self.mode {
            UrlMode::Public { base } => keys
                .into_iter()
                .map(|key| ImageRef {
                    url: public_url(base, &key),
                    alt: alt_label(&key),
                    key,
                    expires_at: None,
                })
                .collect(),
            UrlMode::Signed => self.sign_all(keys, expires_in).await,
        };

        Ok(images)
    }

    async fn sign_all(&self, keys: Vec<ObjectKey>, expires_in: Duration) -> Vec<ImageRef> {
        // Taken before signing so the recorded expiry never overshoots the real one.
        let expires_at = chrono::Duration::from_std(expires_in)
            .ok()
            .map(|d| Utc::now() + d);

        let signed = join_all(keys.iter().map(|key| self.store.presign_get(key, expires_in))).await;

        let total = keys.len();
        let images: Vec<ImageRef> = keys
            .into_iter()
            .zip(signed)
            .filter_map(|(key, result)| match result {
                Ok(url) => Some(ImageRef {
                    url,
                    alt: alt_label(&key),
                    key,
                    expires_at,
                }),
                Err(e) => {
                    warn!(key = %key, error = %e, "dropping image that failed to sign");
                    None
                }
            })
            .collect();

        if images.len() < total {
            debug!(signed = images.len(), dropped = total - images.len(), "signing finished");
        }
        images
    }
}
