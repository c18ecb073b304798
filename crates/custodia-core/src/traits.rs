//! Storage trait definitions for the Custodia audit core.
//!
//! Three seams separate the core from whatever persistence backs it:
//!
//! - `LedgerStore`   — append-only hash-chain rows, case-scoped
//! - `EvidenceStore` — immutable evidence records
//! - `CustodyStore`  — chain-of-custody records
//!
//! None of the traits expose an update or per-entry delete operation.
//! The only mutation beyond insert is whole-case cascade deletion, driven
//! by [`crate::teardown::purge_case`] in dependency order.

use custodia_contracts::{
    case::CaseId,
    custody::CustodyRecord,
    error::CustodiaResult,
    evidence::{EvidenceId, EvidenceRecord},
    ledger::LedgerEntry,
};

/// Append-only persistence for a case's audit hash chain.
///
/// The store is the single source of truth for the chain head: the
/// recorder reads `most_recent()` on every append rather than caching a
/// head in memory (a stale cached head is as dangerous as an unserialized
/// concurrent append).
pub trait LedgerStore: Send + Sync {
    /// Append one fully built entry.
    ///
    /// Implementations must serialize appends per case: if the entry's
    /// `previous_hash` does not equal the current head's `entry_hash`
    /// (or the genesis sentinel for an empty chain), the append must be
    /// rejected with `CustodiaError::LedgerAppendConflict` instead of
    /// silently forking the chain. The check and the insert must be atomic
    /// with respect to other appends for the same case.
    fn append(&self, entry: LedgerEntry) -> CustodiaResult<LedgerEntry>;

    /// The most recent entry for `case_id`, or `None` for a fresh case.
    fn most_recent(&self, case_id: &CaseId) -> CustodiaResult<Option<LedgerEntry>>;

    /// All entries for `case_id` in ascending chain order.
    ///
    /// The returned snapshot must be consistent — never a half-written
    /// entry — so verification may run concurrently with appends.
    fn entries(&self, case_id: &CaseId) -> CustodiaResult<Vec<LedgerEntry>>;

    /// Remove every entry for `case_id`, returning the count removed.
    ///
    /// The only delete operation on the ledger. Called exclusively from
    /// whole-case teardown, after evidence and custody records are gone.
    fn delete_case(&self, case_id: &CaseId) -> CustodiaResult<u64>;
}

/// Persistence for immutable evidence records.
pub trait EvidenceStore: Send + Sync {
    /// Insert a record created at upload. There is no update path.
    fn insert(&self, record: EvidenceRecord) -> CustodiaResult<()>;

    /// Look up one evidence record by ID.
    fn get(&self, evidence_id: &EvidenceId) -> CustodiaResult<Option<EvidenceRecord>>;

    /// All evidence for `case_id`, in upload order.
    fn for_case(&self, case_id: &CaseId) -> CustodiaResult<Vec<EvidenceRecord>>;

    /// Remove every record for `case_id`, returning the count removed.
    fn delete_case(&self, case_id: &CaseId) -> CustodiaResult<u64>;
}

/// Persistence for chain-of-custody records.
pub trait CustodyStore: Send + Sync {
    /// Insert a validated custody record.
    fn insert(&self, record: CustodyRecord) -> CustodiaResult<()>;

    /// All custody records for one item of evidence, in recording order.
    fn for_evidence(&self, evidence_id: &EvidenceId) -> CustodiaResult<Vec<CustodyRecord>>;

    /// All custody records for `case_id`, in recording order.
    fn for_case(&self, case_id: &CaseId) -> CustodiaResult<Vec<CustodyRecord>>;

    /// Remove every record for `case_id`, returning the count removed.
    fn delete_case(&self, case_id: &CaseId) -> CustodiaResult<u64>;
}
