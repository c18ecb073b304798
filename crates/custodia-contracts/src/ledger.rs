//! Audit ledger entry and export types.
//!
//! `LedgerEntry` is one immutable record in a case's SHA-256 hash chain.
//! Each entry commits to its predecessor via `previous_hash`; modifying any
//! hashed field invalidates `entry_hash` and every subsequent link, which
//! the chain verifier detects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::case::{ActorId, CaseId};

/// One immutable entry in a case's audit hash chain.
///
/// Entries are append-only: the ledger store exposes no update or
/// per-entry delete operation. The only way an entry leaves the store is
/// whole-case cascade deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Case-scoped position in the chain, starting at 0.
    pub sequence: u64,

    /// The case this entry belongs to. Chains never span cases.
    pub case_id: CaseId,

    /// The user whose action produced this entry.
    pub actor_id: ActorId,

    /// Persisted action tag string (`CASE_CREATED`, `COC_VERIFIED`, …).
    ///
    /// Kept as a plain string so unknown tags written by other components
    /// survive round-trips and hash recomputation byte-for-byte.
    pub action: String,

    /// Free-text human-readable description. Hashed verbatim — store the
    /// exact string before any display-layer escaping.
    pub details: String,

    /// Entry creation time (UTC). Rendered at millisecond precision inside
    /// the hash preimage; monotonically non-decreasing per case under
    /// serial appends.
    pub timestamp: DateTime<Utc>,

    /// The `entry_hash` of the preceding entry for this case, or
    /// [`LedgerEntry::GENESIS_HASH`] for the first entry.
    pub previous_hash: String,

    /// Lowercase hex SHA-256 over the canonical preimage
    /// `caseId|actorId|action|details|timestamp|previousHash`.
    pub entry_hash: String,
}

impl LedgerEntry {
    /// The sentinel `previous_hash` rooting every case's chain.
    ///
    /// 64 hex zeros — a value SHA-256 never produces in practice, making
    /// genesis detection unambiguous.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";

    /// A truncated hash prefix for human inspection in listings.
    ///
    /// Verifiers must use the full `entry_hash`; this is display-only.
    pub fn short_hash(&self) -> &str {
        &self.entry_hash[..self.entry_hash.len().min(12)]
    }
}

/// A sealed snapshot of one case's full chain, for display and export.
///
/// The `head_hash` is the last entry's `entry_hash` and acts as a compact
/// commitment to the entire ledger at export time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// The case whose chain is captured here.
    pub case_id: CaseId,

    /// All entries in chain order (sequence 0 first).
    pub entries: Vec<LedgerEntry>,

    /// Wall-clock time (UTC) the snapshot was taken.
    pub exported_at: DateTime<Utc>,

    /// The last entry's `entry_hash`; empty string for an empty chain.
    pub head_hash: String,
}
