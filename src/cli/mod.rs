//! Command-line interface.

pub mod completions;
pub mod hash;
pub mod images;
pub mod output;
pub mod page;
pub mod prompt;
pub mod status;
pub mod unlock;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::config::Config;
use crate::core::media::{MediaLister, UrlMode};
use crate::core::storage::S3Store;
use crate::error::{Error, Result};

/// Soiree - passphrase gate and private S3 gallery for invitation pages.
#[derive(Parser)]
#[command(
    name = "soiree",
    about = "Passphrase gate and private S3 gallery for invitation pages",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./.soiree.toml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the digest to configure for a passphrase
    Hash {
        /// Passphrase (prompted for when omitted)
        passphrase: Option<String>,
        /// Read the passphrase from stdin
        #[arg(long)]
        stdin: bool,
    },

    /// Check a passphrase against the configured digest
    Unlock {
        /// Read the passphrase from stdin
        #[arg(long)]
        stdin: bool,
    },

    /// List the images in a folder with display urls
    Images {
        /// Folder prefix in the bucket
        #[arg(default_value = crate::core::constants::DEFAULT_FOLDER)]
        folder: String,
        /// Signed url lifetime in seconds (defaults to gallery.expires_in)
        #[arg(short, long, value_name = "SECS")]
        expires_in: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Keep refreshing every SECS seconds, re-signing only near expiry
        #[arg(long, value_name = "SECS")]
        watch: Option<u64>,
    },

    /// Unlock, then print the assembled invitation page
    Page {
        /// Read the passphrase from stdin
        #[arg(long)]
        stdin: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config_path: Option<PathBuf>) -> Result<()> {
    use Command::*;

    let load = || Config::load(config_path.as_deref());

    match command {
        Hash { passphrase, stdin } => hash::execute(passphrase, stdin),
        Unlock { stdin } => unlock::execute(&load()?, stdin),
        Images {
            folder,
            expires_in,
            json,
            watch,
        } => {
            let config = load()?;
            let expires_in = expires_in.unwrap_or(config.gallery.expires_in);
            block_on(images::execute(&config, &folder, expires_in, json, watch))
        }
        Page { stdin, json } => page::execute(&load()?, stdin, json),
        Status => status::execute(&load()?, config_path.as_deref()),
        Completions { shell } => completions::execute(shell),
    }
}

/// Run a future on a single-threaded runtime.
pub(crate) fn block_on<F: std::future::Future<Output = Result<()>>>(future: F) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Other(format!("failed to create runtime: {}", e)))?;
    rt.block_on(future)
}

/// Build the gallery lister described by the storage config.
pub(crate) async fn lister(config: &Config) -> Result<MediaLister> {
    let mode = UrlMode::from_config(&config.storage)?;
    let store = S3Store::connect(&config.storage).await?;
    Ok(MediaLister::new(Arc::new(store), mode))
}
