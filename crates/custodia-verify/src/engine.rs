//! The chain verifier.
//!
//! Walks a case's ordered entries and checks two rules per entry:
//!
//! 1. **Hash correctness** — the stored `entry_hash` matches a
//!    recomputation from the entry's own fields (same preimage format the
//!    recorder used). A mismatch means the row was altered after the fact.
//! 2. **Prev-hash linkage** — the stored `previous_hash` equals the
//!    previous entry's hash (genesis sentinel for entry 0). A mismatch
//!    means an entry was deleted, inserted, or reordered.
//!
//! The first failing entry short-circuits the walk; a failing entry is
//! never skipped and a broken chain is never repaired.

use std::sync::Arc;

use tracing::{debug, warn};

use custodia_contracts::{
    case::CaseId,
    error::CustodiaResult,
    ledger::LedgerEntry,
    verify::{ChainFault, VerificationResult},
};
use custodia_core::traits::LedgerStore;
use custodia_ledger::chain::recompute_hash;

/// Verify an ordered slice of entries as one chain.
///
/// An empty slice is trivially valid. Positions in the verdict are 0-based
/// indexes into `entries`.
pub fn verify_entries(entries: &[LedgerEntry]) -> VerificationResult {
    let mut expected_prev = LedgerEntry::GENESIS_HASH.to_string();

    for (position, entry) in entries.iter().enumerate() {
        // Rule 1: the stored hash must recompute from the stored fields.
        if recompute_hash(entry) != entry.entry_hash {
            return VerificationResult::Broken {
                position,
                reason: ChainFault::HashMismatch,
            };
        }

        // Rule 2: the stored prev_hash must match what we expect.
        if entry.previous_hash != expected_prev {
            return VerificationResult::Broken {
                position,
                reason: ChainFault::LinkMismatch,
            };
        }

        expected_prev = entry.entry_hash.clone();
    }

    VerificationResult::Valid
}

/// Verifies case chains read from a `LedgerStore`.
///
/// Read-only: verification takes whatever consistent snapshot the store
/// provides and may run concurrently with appends.
#[derive(Clone)]
pub struct ChainVerifier {
    store: Arc<dyn LedgerStore>,
}

impl ChainVerifier {
    /// Create a verifier over the given store.
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Walk `case_id`'s chain and return the verdict.
    ///
    /// `Err` is reserved for store failures; a broken chain is an `Ok`
    /// verdict carrying the first offending position and reason.
    pub fn verify(&self, case_id: &CaseId) -> CustodiaResult<VerificationResult> {
        let entries = self.store.entries(case_id)?;
        let verdict = verify_entries(&entries);

        match &verdict {
            VerificationResult::Valid => {
                debug!(case_id = %case_id, entries = entries.len(), "chain verified valid");
            }
            VerificationResult::Broken { position, reason } => {
                warn!(
                    case_id = %case_id,
                    position,
                    reason = %reason,
                    "chain verification failed"
                );
            }
        }

        Ok(verdict)
    }
}
