//! Soiree - passphrase gate and private S3 gallery for invitation pages.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use soiree::cli::output;
use soiree::cli::{execute, Cli};
use soiree::core::constants::LOG_ENV;
use soiree::error::{ConfigError, CredentialError, Error, StorageError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("soiree=debug")
        } else {
            EnvFilter::new("soiree=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.config) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingField { field: "gate.digest" }) => {
                Some("run: soiree hash, then set SOIREE_PASSWORD_HASH")
            }
            Error::Config(ConfigError::MissingField {
                field: "storage.bucket",
            }) => Some("set SOIREE_AWS_BUCKET_NAME or [storage] bucket"),
            Error::Credential(CredentialError::Incorrect) => Some("try again"),
            Error::Credential(CredentialError::DigestUnavailable(_)) => Some("try again"),
            Error::Storage(StorageError::Listing(_)) => {
                Some("check the bucket name, region, and credentials")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
