//! Passphrase gate.
//!
//! Compares the SHA-256 digest of a candidate passphrase against the digest
//! configured by the operator. The plaintext is never stored or logged.
//!
//! This keeps casual visitors out; it is not an authentication system. The
//! digest is unsalted and ships alongside the page.

use sha2::{Digest, Sha256 as Sha256Hasher};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::core::constants::DIGEST_HEX_LEN;
use crate::core::types::HexDigest;
use crate::error::{ConfigError, CredentialError, Result};

/// Digest facility used by the gate.
///
/// The bundled [`Sha256`] cannot fail; the `Result` exists so a platform
/// facility that can be unavailable reports that instead of a mismatch.
pub trait Digester: Send + Sync {
    /// Hex-encoded (lowercase) digest of `input`.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::DigestUnavailable` if the digest cannot be
    /// computed.
    fn digest_hex(&self, input: &[u8]) -> Result<HexDigest>;

    /// Algorithm name for display.
    fn name(&self) -> &'static str;
}

/// SHA-256 digester.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl Digester for Sha256 {
    fn digest_hex(&self, input: &[u8]) -> Result<HexDigest> {
        Ok(to_hex(&Sha256Hasher::digest(input)))
    }

    fn name(&self) -> &'static str {
        "sha256"
    }
}

/// Compute the digest an operator puts in the config for `passphrase`.
pub fn hash_passphrase(passphrase: &str) -> HexDigest {
    to_hex(&Sha256Hasher::digest(passphrase.as_bytes()))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// A validated SHA-256 digest in lowercase hex.
///
/// Only equality against a computed digest is exposed.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretDigest(HexDigest);

impl SecretDigest {
    /// Validate and normalize a configured digest.
    ///
    /// Must be exactly 64 hex characters. Uppercase is folded to lowercase;
    /// nothing is trimmed, truncated, or padded.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on a wrong length or a non-hex
    /// character.
    pub fn parse(value: &str) -> Result<Self> {
        if value.len() != DIGEST_HEX_LEN {
            return Err(ConfigError::InvalidValue {
                field: "gate.digest",
                reason: format!(
                    "expected {} hex characters, got {}",
                    DIGEST_HEX_LEN,
                    value.len()
                ),
            }
            .into());
        }

        if let Some((i, ch)) = value.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidValue {
                field: "gate.digest",
                reason: format!("invalid character '{}' at position {}", ch, i + 1),
            }
            .into());
        }

        Ok(Self(value.to_ascii_lowercase()))
    }

    /// Constant-time comparison against a computed hex digest.
    fn matches(&self, computed: &str) -> bool {
        constant_time_eq(self.0.as_bytes(), computed.as_bytes())
    }
}

impl FromStr for SecretDigest {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Never print the digest itself.
impl fmt::Debug for SecretDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretDigest({}…)", &self.0[..8])
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Passphrase gate bound to one configured digest.
#[derive(Debug)]
pub struct Gate<D = Sha256> {
    digest: SecretDigest,
    digester: D,
}

impl Gate<Sha256> {
    /// Create a SHA-256 gate for the given digest.
    pub fn new(digest: SecretDigest) -> Self {
        Self {
            digest,
            digester: Sha256,
        }
    }
}

impl<D: Digester> Gate<D> {
    /// Create a gate with a custom digest facility.
    pub fn with_digester(digest: SecretDigest, digester: D) -> Self {
        Self { digest, digester }
    }

    /// Check whether `candidate` is the configured passphrase.
    ///
    /// No normalization is applied: case and surrounding whitespace matter.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::DigestUnavailable` if the digest could not be
    /// computed. A wrong passphrase is `Ok(false)`, not an error.
    pub fn verify(&self, candidate: &str) -> Result<bool> {
        let computed = self.digester.digest_hex(candidate.as_bytes())?;
        let ok = self.digest.matches(&computed);
        debug!(algorithm = self.digester.name(), matched = ok, "passphrase checked");
        Ok(ok)
    }

    /// Like [`Gate::verify`], but a mismatch is `CredentialError::Incorrect`.
    pub fn authorize(&self, candidate: &str) -> Result<()> {
        if self.verify(candidate)? {
            Ok(())
        } else {
            Err(CredentialError::Incorrect.into())
        }
    }
}
