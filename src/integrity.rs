//! Content hashing and integrity verification.
//!
//! Expected hashes are written as `algo:hex` or as a bare hex digest, in
//! which case the algorithm defaults to sha256. sha256 is the only
//! supported algorithm; an unknown algorithm falls back to a sha256
//! comparison with a warning.

use sha2::{Digest, Sha256};
use tracing::warn;

/// Hex-encoded sha256 digest of `content`.
#[must_use]
pub fn hash_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Check `content` against an expected `algo:hex` or bare hex digest.
#[must_use]
pub fn verify(expected: &str, content: &[u8]) -> bool {
    let (algo, digest) = match expected.split_once(':') {
        Some((algo, digest)) => (algo.to_ascii_lowercase(), digest),
        None => ("sha256".to_string(), expected),
    };

    if algo != "sha256" {
        warn!(algo = %algo, "unknown hash algorithm, comparing against sha256");
    }

    hash_hex(content) == digest
}

#[cfg(test)]
#[path = "integrity_tests.rs"]
mod tests;
