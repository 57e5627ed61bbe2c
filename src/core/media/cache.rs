//! Opt-in expiry-aware cache over [`MediaLister`].
//!
//! Plain [`MediaLister::fetch`] re-lists and re-signs on every call. For
//! callers that refresh often, `CachedLister` reuses a result keyed by
//! `(folder, expires_in)` until it is `max_age` old or until its earliest
//! signed url is within `margin` of expiring, whichever comes first.
//! Failed fetches are never cached.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

use super::{ImageRef, MediaLister};
use crate::core::types::Folder;
use crate::error::Result;

type CacheKey = (Folder, u64);

struct Entry {
    images: Vec<ImageRef>,
    fresh_until: DateTime<Utc>,
}

pub struct CachedLister {
    inner: MediaLister,
    max_age: chrono::Duration,
    margin: chrono::Duration,
    entries: Mutex<HashMap<CacheKey, Entry>>,
}

impl CachedLister {
    pub fn new(inner: MediaLister, max_age: Duration, margin: Duration) -> Self {
        Self {
            inner,
            max_age: to_chrono(max_age),
            margin: to_chrono(margin),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &MediaLister {
        &self.inner
    }

    /// Cached [`MediaLister::fetch`].
    pub async fn fetch(&self, folder: &str, expires_in: Duration) -> Result<Vec<ImageRef>> {
        self.fetch_at(folder, expires_in, Utc::now()).await
    }

    async fn fetch_at(
        &self,
        folder: &str,
        expires_in: Duration,
        now: DateTime<Utc>,
    ) -> Result<Vec<ImageRef>> {
        let key = (folder.to_string(), expires_in.as_secs());

        if let Some(images) = self.lookup(&key, now) {
            debug!(folder, "gallery cache hit");
            return Ok(images);
        }

        let images = self.inner.fetch(folder, expires_in).await?;
        let fresh_until = self.fresh_until(&images, now);
        debug!(folder, fresh_until = %fresh_until, "gallery cache fill");

        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(
                key,
                Entry {
                    images: images.clone(),
                    fresh_until,
                },
            );

        Ok(images)
    }

    /// Drop cached entries for `folder`, or everything when `None`.
    pub fn invalidate(&self, folder: Option<&str>) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match folder {
            Some(f) => entries.retain(|(cached, _), _| cached != f),
            None => entries.clear(),
        }
    }

    fn lookup(&self, key: &CacheKey, now: DateTime<Utc>) -> Option<Vec<ImageRef>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .get(key)
            .filter(|entry| now < entry.fresh_until)
            .map(|entry| entry.images.clone())
    }

    fn fresh_until(&self, images: &[ImageRef], fetched_at: DateTime<Utc>) -> DateTime<Utc> {
        images
            .iter()
            .filter_map(|image| image.expires_at)
            .map(|at| {
                at.checked_sub_signed(self.margin)
                    .unwrap_or(DateTime::<Utc>::MIN_UTC)
            })
            .fold(
                fetched_at
                    .checked_add_signed(self.max_age)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC),
                |acc, at| acc.min(at),
            )
    }
}

fn to_chrono(d: Duration) -> chrono::Duration {
    chrono::Duration::from_std(d).unwrap_or(chrono::Duration::MAX)
}
