//! In-memory implementation of `LedgerStore`.
//!
//! `InMemoryLedgerStore` keeps one `Vec<LedgerEntry>` per case behind a
//! single `Mutex`. Holding the lock across the head check and the insert
//! makes each append atomic, which is exactly the per-case serialization
//! point the chain invariant requires.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use custodia_contracts::{
    case::CaseId,
    error::{CustodiaError, CustodiaResult},
    ledger::LedgerEntry,
};
use custodia_core::traits::LedgerStore;

/// An in-memory, append-only ledger store.
///
/// # Thread safety
///
/// All operations acquire the internal mutex; clones share the same
/// underlying map, so a recorder and a verifier can hold clones across
/// threads without additional synchronization.
#[derive(Clone, Default)]
pub struct InMemoryLedgerStore {
    chains: Arc<Mutex<HashMap<CaseId, Vec<LedgerEntry>>>>,
}

impl InMemoryLedgerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CustodiaResult<std::sync::MutexGuard<'_, HashMap<CaseId, Vec<LedgerEntry>>>> {
        self.chains
            .lock()
            .map_err(|e| CustodiaError::LedgerPersistence {
                reason: format!("ledger store lock poisoned: {}", e),
            })
    }
}

impl LedgerStore for InMemoryLedgerStore {
    /// Append `entry` if and only if it extends the current head.
    ///
    /// The head comparison under the lock is the uniqueness constraint on
    /// `(case_id, previous_hash)`: two concurrent appends that both read
    /// the same head cannot both land — the second one gets
    /// `LedgerAppendConflict` and must retry with the new head.
    fn append(&self, entry: LedgerEntry) -> CustodiaResult<LedgerEntry> {
        let mut chains = self.lock()?;
        let chain = chains.entry(entry.case_id).or_default();

        let head = chain
            .last()
            .map(|e| e.entry_hash.as_str())
            .unwrap_or(LedgerEntry::GENESIS_HASH);

        if entry.previous_hash != head {
            return Err(CustodiaError::LedgerAppendConflict {
                case_id: entry.case_id.to_string(),
                expected: head.to_string(),
                found: entry.previous_hash,
            });
        }

        chain.push(entry.clone());
        Ok(entry)
    }

    fn most_recent(&self, case_id: &CaseId) -> CustodiaResult<Option<LedgerEntry>> {
        let chains = self.lock()?;
        Ok(chains.get(case_id).and_then(|chain| chain.last().cloned()))
    }

    /// A consistent snapshot of the full chain, cloned under the lock.
    fn entries(&self, case_id: &CaseId) -> CustodiaResult<Vec<LedgerEntry>> {
        let chains = self.lock()?;
        Ok(chains.get(case_id).cloned().unwrap_or_default())
    }

    fn delete_case(&self, case_id: &CaseId) -> CustodiaResult<u64> {
        let mut chains = self.lock()?;
        Ok(chains.remove(case_id).map(|c| c.len() as u64).unwrap_or(0))
    }
}
