//! Evidence content hashing.
//!
//! Fixed-length SHA-256 digests over raw file bytes, hex-encoded lowercase.
//! Computed before any network transmission so the digest is attested
//! independently of transport and storage. If the input cannot be read,
//! an explicit error is returned — never a placeholder string.

use std::io::Read;

use sha2::{Digest, Sha256};

use custodia_contracts::error::{CustodiaError, CustodiaResult};

/// Read buffer size for streaming digests.
const CHUNK_SIZE: usize = 64 * 1024;

/// SHA-256 of an in-memory byte slice, as 64 lowercase hex chars.
///
/// Deterministic: identical bytes always yield the identical digest.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// SHA-256 of a stream, as 64 lowercase hex chars.
///
/// Reads in 64 KiB chunks so arbitrarily large evidence files hash in
/// constant memory. A read failure returns
/// `CustodiaError::HashComputation` — the caller must not persist a record
/// claiming a hash that was not actually computed.
pub fn sha256_hex_reader<R: Read>(mut reader: R) -> CustodiaResult<String> {
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = reader
            .read(&mut buf)
            .map_err(|e| CustodiaError::HashComputation {
                reason: e.to_string(),
            })?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Check that a client-supplied digest is plausibly a SHA-256 hex string
/// and normalize it to lowercase.
///
/// Rejects anything that is not exactly 64 hex characters — a record must
/// never be persisted with a digest nobody computed.
pub fn normalize_digest(digest: &str) -> CustodiaResult<String> {
    let trimmed = digest.trim();
    if trimmed.len() != 64 || !trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CustodiaError::HashComputation {
            reason: format!("'{}' is not a 64-character hex digest", trimmed),
        });
    }
    Ok(trimmed.to_ascii_lowercase())
}
