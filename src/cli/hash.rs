//! Hash command - digest a passphrase for the config.

use zeroize::Zeroizing;

use crate::cli::{output, prompt};
use crate::core::constants::env;
use crate::core::gate;
use crate::error::{Error, Result};

/// Print the SHA-256 digest of the passphrase.
pub fn execute(passphrase: Option<String>, from_stdin: bool) -> Result<()> {
    let passphrase = match passphrase {
        Some(p) if p.is_empty() => {
            return Err(Error::Other("passphrase cannot be empty".to_string()));
        }
        Some(p) => Zeroizing::new(p),
        None => prompt::passphrase("Passphrase", true, from_stdin)?,
    };

    let digest = gate::hash_passphrase(&passphrase);
    println!("{}", digest);

    output::hint(&format!(
        "set {} or [gate] digest in .soiree.toml",
        output::cmd(env::PASSWORD_HASH)
    ));
    Ok(())
}
