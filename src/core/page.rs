//! Invitation page assembly.
//!
//! Everything the page shows once the gate is passed: event details, the
//! carousel, the round portrait, and the map links. The carousel and the
//! portrait are fetched concurrently and fail independently.

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::config::{Config, EventConfig, GalleryConfig, MapConfig};
use crate::core::constants::DEFAULT_PORTRAIT_ALT;
use crate::core::media::{self, ImageRef, MediaLister};
use crate::error::Result;

/// Outcome of one gallery section.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Section {
    Ready { images: Vec<ImageRef> },
    Failed { error: String },
}

impl Section {
    pub fn images(&self) -> &[ImageRef] {
        match self {
            Self::Ready { images } => images,
            Self::Failed { .. } => &[],
        }
    }
}

/// The assembled page.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub event: EventConfig,
    pub carousel: Section,
    /// `None` when nothing matched and no fallback is configured
    pub portrait: Option<ImageRef>,
    pub map: MapConfig,
}

/// Static page content plus the gallery settings used to fill it.
#[derive(Debug, Clone)]
pub struct Invitation {
    event: EventConfig,
    gallery: GalleryConfig,
    map: MapConfig,
}

impl Invitation {
    pub fn from_config(config: &Config) -> Self {
        Self {
            event: config.event.clone(),
            gallery: config.gallery.clone(),
            map: config.map.clone(),
        }
    }

    /// Fetch both gallery sections and build the manifest.
    ///
    /// # Errors
    ///
    /// Only an invalid expiry fails the whole call; listing failures are
    /// recorded per section.
    pub async fn assemble(&self, lister: &MediaLister) -> Result<Manifest> {
        let expires_in = media::expiry(self.gallery.expires_in)?;

        let (carousel, portrait) = tokio::join!(
            lister.fetch(&self.gallery.carousel_folder, expires_in),
            lister.fetch(&self.gallery.portrait_folder, expires_in),
        );

        let carousel = match carousel {
            Ok(images) => Section::Ready { images },
            Err(e) => {
                warn!(folder = %self.gallery.carousel_folder, error = %e, "carousel unavailable");
                Section::Failed {
                    error: e.to_string(),
                }
            }
        };

        let portrait = match portrait {
            Ok(images) => select_portrait(&images, &self.gallery.portrait_key),
            Err(e) => {
                warn!(folder = %self.gallery.portrait_folder, error = %e, "portrait unavailable");
                None
            }
        }
        .or_else(|| self.fallback_portrait());

        debug!(
            carousel = carousel.images().len(),
            portrait = portrait.is_some(),
            "page assembled"
        );

        Ok(Manifest {
            event: self.event.clone(),
            carousel,
            portrait,
            map: self.map.clone(),
        })
    }

    fn fallback_portrait(&self) -> Option<ImageRef> {
        self.gallery
            .portrait_fallback_url
            .as_ref()
            .map(|url| ImageRef {
                key: String::new(),
                url: url.clone(),
                alt: DEFAULT_PORTRAIT_ALT.to_string(),
                expires_at: None,
            })
    }
}

/// First image whose key contains `fragment`.
pub fn select_portrait(images: &[ImageRef], fragment: &str) -> Option<ImageRef> {
    images
        .iter()
        .find(|image| image.key.contains(fragment))
        .cloned()
}
