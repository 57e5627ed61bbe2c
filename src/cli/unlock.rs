//! Unlock command - check a passphrase against the gate.

use crate::cli::{output, prompt};
use crate::core::config::Config;
use crate::error::Result;

/// Prompt for the passphrase and verify it.
pub fn execute(config: &Config, from_stdin: bool) -> Result<()> {
    let gate = config.gate()?;
    let candidate = prompt::passphrase("Passphrase", false, from_stdin)?;

    gate.authorize(&candidate)?;
    output::success("access granted");
    Ok(())
}
