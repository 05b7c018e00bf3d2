//! SHA-256 digest newtype for manifest records.
//!
//! Digests are only ever computed from raw artefact bytes, so every value
//! is a 64-character lowercase hexadecimal string.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// A hex-encoded SHA-256 digest string.
///
/// # Examples
///
/// ```
/// use module_manifest::artefact::sha256_digest::Sha256Digest;
///
/// let digest = Sha256Digest::of(b"hello");
/// assert_eq!(
///     digest.as_str(),
///     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sha256Digest(String);

impl Sha256Digest {
    /// Compute the digest of `bytes`.
    ///
    /// The result depends only on the byte content, never on where or when
    /// the bytes were obtained.
    #[must_use]
    pub fn of(bytes: &[u8]) -> Self {
        // `LowerHex` on the sha2 output always yields 64 lowercase hex chars.
        Self(format!("{:x}", Sha256::digest(bytes)))
    }

    /// Return the digest as a hex string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Sha256Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
