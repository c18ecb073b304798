//! Hash-chain primitives: the canonical preimage and entry hashing.
//!
//! Every entry's hash is SHA-256 over a pipe-delimited preimage string.
//! Field order and delimiter are part of the format contract — changing
//! either changes every future hash and breaks verification of historical
//! entries, so the format must be versioned if it ever changes.
//!
//! Preimage layout (UTF-8 bytes, in order, joined with `|`):
//!   1. case_id        — UUID, lowercase hyphenated
//!   2. actor_id       — UUID, lowercase hyphenated
//!   3. action         — persisted tag string, verbatim
//!   4. details        — free text, verbatim (no escaping, no trimming)
//!   5. timestamp      — RFC 3339 UTC with millisecond precision, `Z` suffix
//!   6. previous_hash  — 64 ASCII hex chars, or the genesis sentinel

use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

use custodia_contracts::{
    case::{ActorId, CaseId},
    ledger::LedgerEntry,
};

/// Render a timestamp the way the preimage expects it.
///
/// RFC 3339, UTC, millisecond precision: `2026-08-31T14:03:07.123Z`.
/// The stored value is a `DateTime<Utc>`; re-rendering it through this
/// function is byte-stable, so hashes survive store round-trips.
pub fn preimage_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the canonical preimage string for one entry.
pub fn preimage(
    case_id: &CaseId,
    actor_id: &ActorId,
    action: &str,
    details: &str,
    timestamp: &DateTime<Utc>,
    previous_hash: &str,
) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        case_id,
        actor_id,
        action,
        details,
        preimage_timestamp(timestamp),
        previous_hash
    )
}

/// Compute the SHA-256 entry hash over the canonical preimage.
///
/// Returns a lowercase 64-character hex string. Deterministic: identical
/// inputs always produce the identical digest (property the verifier
/// depends on when recomputing historical hashes).
pub fn hash_entry(
    case_id: &CaseId,
    actor_id: &ActorId,
    action: &str,
    details: &str,
    timestamp: &DateTime<Utc>,
    previous_hash: &str,
) -> String {
    let preimage = preimage(case_id, actor_id, action, details, timestamp, previous_hash);

    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recompute an entry's hash from its own stored fields.
///
/// Used by the verifier: a mismatch against the stored `entry_hash` means
/// the row was altered after it was written.
pub fn recompute_hash(entry: &LedgerEntry) -> String {
    hash_entry(
        &entry.case_id,
        &entry.actor_id,
        &entry.action,
        &entry.details,
        &entry.timestamp,
        &entry.previous_hash,
    )
}
