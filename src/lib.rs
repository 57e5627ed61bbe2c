//! Soiree - passphrase gate and private S3 gallery for invitation pages.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── hash          # Digest a passphrase for the config
//! │   ├── unlock        # Check a passphrase against the gate
//! │   ├── images        # List a folder as display urls
//! │   ├── page          # Gate, then assemble the whole page
//! │   ├── status        # Effective configuration
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .soiree.toml + SOIREE_* environment
//!     ├── gate          # SHA-256 passphrase check
//!     ├── storage/      # Object storage backends
//!     │   ├── mod       # ObjectStore trait, pagination
//!     │   └── s3        # Amazon S3 implementation
//!     ├── media/        # Image listing and url resolution
//!     │   ├── filter    # Image keys and alt labels
//!     │   └── cache     # Opt-in expiry-aware cache
//!     └── page          # Invitation manifest
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use soiree::core::config::Config;
//! use soiree::core::media::{MediaLister, UrlMode};
//! use soiree::core::storage::S3Store;
//!
//! # async fn run() -> soiree::error::Result<()> {
//! let config = Config::load(None)?;
//! config.gate()?.authorize("correct horse")?;
//!
//! let store = S3Store::connect(&config.storage).await?;
//! let lister = MediaLister::new(Arc::new(store), UrlMode::from_config(&config.storage)?);
//! for image in lister.fetch("carousel", Duration::from_secs(3600)).await? {
//!     println!("{} {}", image.alt, image.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
