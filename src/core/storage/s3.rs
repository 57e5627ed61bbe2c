//! Amazon S3 backend.
//!
//! The client is built once from [`StorageConfig`] and handed to whoever
//! needs it. With static credentials requests are signed; without them the
//! client talks to the bucket anonymously (public-read buckets).

use async_trait::async_trait;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use std::time::Duration;
use tracing::{debug, trace};

use super::{ListPage, ObjectStore};
use crate::core::config::StorageConfig;
use crate::core::constants::CREDENTIALS_PROVIDER;
use crate::core::types::ContinuationToken;
use crate::error::{Result, StorageError};

/// S3 object store bound to one bucket.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if no bucket is configured.
    pub async fn connect(config: &StorageConfig) -> Result<Self> {
        let bucket = config.bucket()?.to_string();

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        loader = match config.credentials() {
            Some(creds) => {
                debug!("using static credentials");
                loader.credentials_provider(Credentials::new(
                    creds.access_key_id,
                    creds.secret_access_key,
                    None,
                    None,
                    CREDENTIALS_PROVIDER,
                ))
            }
            None => {
                debug!("no credentials configured, using anonymous requests");
                loader.no_credentials()
            }
        };

        if let Some(timeout) = config.timeout() {
            loader = loader.timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(timeout)
                    .build(),
            );
        }

        let shared = loader.load().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = &config.endpoint_url {
            debug!(endpoint = %endpoint, "using custom endpoint");
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        debug!(bucket = %bucket, region = %config.region, "s3 client ready");
        Ok(Self::from_client(Client::from_conf(builder.build()), bucket))
    }

    /// Wrap an existing client.
    pub fn from_client(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn list_page(
        &self,
        prefix: &str,
        continuation: Option<ContinuationToken>,
    ) -> Result<ListPage> {
        let mut request = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix);
        if let Some(token) = continuation {
            request = request.continuation_token(token);
        }

        let output = request
            .send()
            .await
            .map_err(|e| StorageError::Listing(format!("ListObjectsV2 failed: {}", e)))?;

        let keys = output
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_string))
            .collect();

        let next = if output.is_truncated().unwrap_or(false) {
            output.next_continuation_token().map(str::to_string)
        } else {
            None
        };

        Ok(ListPage { keys, next })
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String> {
        trace!(key, expires_in = expires_in.as_secs(), "presigning");

        let presigning = PresigningConfig::expires_in(expires_in).map_err(|e| {
            StorageError::Signing {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Signing {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(request.uri().to_string())
    }
}
