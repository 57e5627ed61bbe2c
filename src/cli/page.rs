//! Page command - gate, then print the invitation.

use crate::cli::{output, prompt};
use crate::core::config::Config;
use crate::core::page::{Invitation, Manifest, Section};
use crate::error::Result;

/// Verify the passphrase, then assemble and print the page.
pub fn execute(config: &Config, from_stdin: bool, json: bool) -> Result<()> {
    let gate = config.gate()?;
    let candidate = prompt::passphrase("Passphrase", false, from_stdin)?;
    gate.authorize(&candidate)?;
    drop(candidate);

    let invitation = Invitation::from_config(config);
    crate::cli::block_on(async {
        let lister = crate::cli::lister(config).await?;
        let manifest = invitation.assemble(&lister).await?;
        print(&manifest, json)
    })
}

fn print(manifest: &Manifest, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(manifest)?);
        return Ok(());
    }

    let event = &manifest.event;
    output::section(event.title.as_deref().unwrap_or("Invitation"));
    for (label, value) in [
        ("where", &event.address),
        ("date", &event.date),
        ("time", &event.time),
    ] {
        if let Some(value) = value {
            output::kv(label, value);
        }
    }

    output::section("Carousel");
    match &manifest.carousel {
        Section::Ready { images } if images.is_empty() => output::dimmed("no images found"),
        Section::Ready { images } => {
            for image in images {
                output::list_item(&format!("{}  {}", image.alt, output::url(&image.url)));
            }
        }
        Section::Failed { error } => output::warn(&format!("could not load images: {}", error)),
    }

    output::section("Portrait");
    match &manifest.portrait {
        Some(image) => output::list_item(&format!("{}  {}", image.alt, output::url(&image.url))),
        None => output::dimmed("none"),
    }

    if manifest.map.embed_url.is_some() || manifest.map.directions_url.is_some() {
        output::section("Map");
        if let Some(url) = &manifest.map.embed_url {
            output::kv("embed", output::url(url));
        }
        if let Some(url) = &manifest.map.directions_url {
            output::kv("directions", output::url(url));
        }
    }

    Ok(())
}
