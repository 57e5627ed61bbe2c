//! Object storage abstraction.
//!
//! The gallery only needs two things from a bucket: page through keys under
//! a prefix, and mint a time-limited GET url for one key.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ObjectStore` trait
//! 2. Add the implementation in a new file (e.g., `gcs.rs`)
//! 3. Re-export from this module

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, trace};

use crate::core::constants::MAX_LIST_PAGES;
use crate::core::types::{ContinuationToken, ObjectKey};
use crate::error::{Result, StorageError};

mod s3;

pub use s3::S3Store;

/// One page of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    /// Keys in backend order
    pub keys: Vec<ObjectKey>,
    /// Token for the next page, `None` on the last page
    pub next: Option<ContinuationToken>,
}

/// Storage operations used by the gallery.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Bucket this store reads from.
    fn bucket(&self) -> &str;

    /// Fetch one page of keys under `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Listing` on network or authorization failure.
    async fn list_page(
        &self,
        prefix: &str,
        continuation: Option<ContinuationToken>,
    ) -> Result<ListPage>;

    /// Presign a GET request for `key`, valid for `expires_in`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Signing` if the url cannot be produced.
    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String>;
}

/// List every key under `prefix`, following continuation tokens.
///
/// # Errors
///
/// Fails as a whole if any page fails, or if the backend is still
/// paginating after `MAX_LIST_PAGES` pages. No partial listing is returned.
pub async fn list_all(store: &dyn ObjectStore, prefix: &str) -> Result<Vec<ObjectKey>> {
    let mut keys = Vec::new();
    let mut continuation = None;

    for page_no in 1..=MAX_LIST_PAGES {
        let page = store.list_page(prefix, continuation.take()).await?;
        trace!(page = page_no, keys = page.keys.len(), "listed page");
        keys.extend(page.keys);

        match page.next {
            Some(token) => continuation = Some(token),
            None => {
                debug!(
                    bucket = store.bucket(),
                    prefix,
                    pages = page_no,
                    keys = keys.len(),
                    "listing complete"
                );
                return Ok(keys);
            }
        }
    }

    Err(StorageError::Listing(format!(
        "still paginating after {} pages under '{}'",
        MAX_LIST_PAGES, prefix
    ))
    .into())
}
