//! Images command - list a folder with display urls.

use std::time::Duration;
use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::media::{self, CachedLister, ImageRef, UrlMode};
use crate::error::Result;

/// List `folder` once, or keep refreshing with `watch`.
pub async fn execute(
    config: &Config,
    folder: &str,
    expires_in: u64,
    json: bool,
    watch: Option<u64>,
) -> Result<()> {
    let lifetime = media::expiry(expires_in)?;
    let lister = crate::cli::lister(config).await?;

    let Some(every) = watch else {
        let images = lister.fetch(folder, lifetime).await?;
        return print(folder, &images, lister.mode(), expires_in, json);
    };

    let margin = Duration::from_secs((expires_in / 10).min(60));
    let cached = CachedLister::new(lister, lifetime, margin);
    let mut ticker = tokio::time::interval(Duration::from_secs(every.max(1)));
    let mut shown: Option<Vec<ImageRef>> = None;

    loop {
        ticker.tick().await;
        match cached.fetch(folder, lifetime).await {
            Ok(images) if shown.as_ref() != Some(&images) => {
                print(folder, &images, cached.inner().mode(), expires_in, json)?;
                shown = Some(images);
            }
            Ok(_) => debug!(folder, "no change"),
            Err(e) => output::error(&e.to_string()),
        }
    }
}

fn print(
    folder: &str,
    images: &[ImageRef],
    mode: &UrlMode,
    expires_in: u64,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(images)?);
        return Ok(());
    }

    output::section(&format!("Images in {}", folder));
    if images.is_empty() {
        output::dimmed("no images found");
        return Ok(());
    }

    for image in images {
        output::list_item(&format!("{}  {}", image.alt, output::url(&image.url)));
    }

    println!();
    let count = format!(
        "{} image{}",
        images.len(),
        if images.len() == 1 { "" } else { "s" }
    );
    match mode {
        UrlMode::Signed => output::dimmed(&format!(
            "{}, signed urls expire in {}",
            count,
            output::duration(expires_in)
        )),
        UrlMode::Public { .. } => output::dimmed(&format!("{}, public urls", count)),
    }
    Ok(())
}
