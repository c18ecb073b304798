//! The ledger entry builder.
//!
//! `LedgerRecorder` turns `(case, actor, action, details)` into a chained
//! `LedgerEntry`: it reads the current chain head from the store, stamps
//! the entry, hashes the canonical preimage, and appends. The store — not
//! the recorder — is the source of truth for the chain head; there is no
//! in-memory head cache to go stale.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use custodia_contracts::{
    action::ActionTag,
    case::{ActorId, CaseId},
    error::{CustodiaError, CustodiaResult},
    ledger::{LedgerEntry, LedgerExport},
};
use custodia_core::traits::LedgerStore;

use crate::chain::hash_entry;

/// Builds and appends hash-chained ledger entries.
///
/// Cheap to clone; all state lives behind the store.
#[derive(Clone)]
pub struct LedgerRecorder {
    store: Arc<dyn LedgerStore>,
}

impl LedgerRecorder {
    /// Create a recorder over the given store.
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Append one entry to `case_id`'s chain.
    ///
    /// Reads the most recent entry to obtain `previous_hash` (genesis
    /// sentinel for a fresh case) and the next sequence number, stamps the
    /// entry with the current UTC time, hashes, and persists.
    ///
    /// If the store reports `LedgerAppendConflict` — a concurrent append
    /// for the same case won the race between our read and our insert —
    /// the append is retried exactly once with a freshly read head. A
    /// second conflict propagates to the caller.
    pub fn append(
        &self,
        case_id: CaseId,
        actor_id: ActorId,
        action: &ActionTag,
        details: impl Into<String>,
    ) -> CustodiaResult<LedgerEntry> {
        let action = action.as_tag();
        let details = details.into();

        match self.try_append(case_id, actor_id, &action, &details) {
            Err(CustodiaError::LedgerAppendConflict { .. }) => {
                debug!(
                    case_id = %case_id,
                    action = %action,
                    "append lost a head race, retrying with fresh head"
                );
                self.try_append(case_id, actor_id, &action, &details)
            }
            result => result,
        }
    }

    /// One read-head-then-insert attempt.
    fn try_append(
        &self,
        case_id: CaseId,
        actor_id: ActorId,
        action: &str,
        details: &str,
    ) -> CustodiaResult<LedgerEntry> {
        let (previous_hash, sequence) = match self.store.most_recent(&case_id)? {
            Some(head) => (head.entry_hash, head.sequence + 1),
            None => (LedgerEntry::GENESIS_HASH.to_string(), 0),
        };

        let timestamp = Utc::now();
        let entry_hash = hash_entry(
            &case_id,
            &actor_id,
            action,
            details,
            &timestamp,
            &previous_hash,
        );

        let entry = LedgerEntry {
            sequence,
            case_id,
            actor_id,
            action: action.to_string(),
            details: details.to_string(),
            timestamp,
            previous_hash,
            entry_hash,
        };

        let appended = self.store.append(entry)?;

        debug!(
            case_id = %case_id,
            sequence = appended.sequence,
            action = %appended.action,
            entry_hash = %appended.short_hash(),
            "ledger entry appended"
        );

        Ok(appended)
    }

    /// Append, treating failure as best-effort.
    ///
    /// Business actions like an evidence upload must still succeed when
    /// audit logging is unavailable, but an unaudited action is a
    /// compliance gap — so the failure is surfaced at `warn!` and swallowed.
    pub fn append_best_effort(
        &self,
        case_id: CaseId,
        actor_id: ActorId,
        action: &ActionTag,
        details: impl Into<String>,
    ) -> Option<LedgerEntry> {
        match self.append(case_id, actor_id, action, details) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(
                    case_id = %case_id,
                    action = %action.as_tag(),
                    error = %e,
                    "audit ledger append failed; primary action proceeds unaudited"
                );
                None
            }
        }
    }

    /// Take a sealed snapshot of `case_id`'s chain for display or export.
    pub fn export(&self, case_id: CaseId) -> CustodiaResult<LedgerExport> {
        let entries = self.store.entries(&case_id)?;
        let head_hash = entries
            .last()
            .map(|e| e.entry_hash.clone())
            .unwrap_or_default();

        Ok(LedgerExport {
            case_id,
            entries,
            exported_at: Utc::now(),
            head_hash,
        })
    }
}
