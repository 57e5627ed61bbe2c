//! Status command - show the effective configuration.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::media::UrlMode;
use crate::error::Result;

/// Show configuration with secrets redacted.
pub fn execute(config: &Config, path: Option<&Path>) -> Result<()> {
    output::section("Soiree Status");

    let default_path = Config::default_path();
    let source = match path {
        Some(p) => p.display().to_string(),
        None if default_path.exists() => default_path.display().to_string(),
        None => "environment only".to_string(),
    };
    output::kv("config", source);

    output::kv(
        "gate",
        if config.gate.digest.is_some() {
            "configured"
        } else {
            "not configured"
        },
    );

    let storage = &config.storage;
    output::kv("bucket", storage.bucket.as_deref().unwrap_or("-"));
    output::kv("region", &storage.region);
    if let Some(endpoint) = &storage.endpoint_url {
        output::kv("endpoint", output::url(endpoint));
    }
    if let Some(creds) = storage.credentials() {
        output::kv("access key", mask(creds.access_key_id));
    }

    match UrlMode::from_config(storage) {
        Ok(UrlMode::Signed) => output::kv("urls", "signed"),
        Ok(UrlMode::Public { base }) => output::kv("urls", format!("public ({})", base)),
        Err(_) => output::kv("urls", "unavailable (no bucket)"),
    }

    let gallery = &config.gallery;
    output::kv("carousel", &gallery.carousel_folder);
    output::kv("portrait", format!("{}/{}", gallery.portrait_folder, gallery.portrait_key));
    output::kv("expires in", output::duration(gallery.expires_in));

    if let Some(url) = &config.map.embed_url {
        output::kv("map embed", output::url(url));
    }
    if let Some(url) = &config.map.directions_url {
        output::kv("directions", output::url(url));
    }

    println!();
    if config.gate.digest.is_none() {
        output::hint(&format!(
            "Set a passphrase digest with {}",
            output::cmd("soiree hash")
        ));
    } else if storage.bucket.is_none() {
        output::hint("Set SOIREE_AWS_BUCKET_NAME to enable the gallery");
    }

    Ok(())
}

/// Keep the first four characters of an identifier.
fn mask(value: &str) -> String {
    let shown: String = value.chars().take(4).collect();
    format!("{}…", shown)
}
