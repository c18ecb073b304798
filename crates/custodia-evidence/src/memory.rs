//! In-memory implementation of `EvidenceStore`.
//!
//! Keeps all records in a `Vec` behind a `Mutex`, preserving upload order
//! per case. Reference implementation for tests and the demo; a relational
//! backend would key the same shape by row id.

use std::sync::{Arc, Mutex, MutexGuard};

use custodia_contracts::{
    case::CaseId,
    error::{CustodiaError, CustodiaResult},
    evidence::{EvidenceId, EvidenceRecord},
};
use custodia_core::traits::EvidenceStore;

/// An in-memory evidence store.
#[derive(Clone, Default)]
pub struct InMemoryEvidenceStore {
    records: Arc<Mutex<Vec<EvidenceRecord>>>,
}

impl InMemoryEvidenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CustodiaResult<MutexGuard<'_, Vec<EvidenceRecord>>> {
        self.records
            .lock()
            .map_err(|e| CustodiaError::StorageUnavailable {
                reason: format!("evidence store lock poisoned: {}", e),
            })
    }
}

impl EvidenceStore for InMemoryEvidenceStore {
    fn insert(&self, record: EvidenceRecord) -> CustodiaResult<()> {
        self.lock()?.push(record);
        Ok(())
    }

    fn get(&self, evidence_id: &EvidenceId) -> CustodiaResult<Option<EvidenceRecord>> {
        let records = self.lock()?;
        Ok(records.iter().find(|r| r.id == *evidence_id).cloned())
    }

    fn for_case(&self, case_id: &CaseId) -> CustodiaResult<Vec<EvidenceRecord>> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .filter(|r| r.case_id == *case_id)
            .cloned()
            .collect())
    }

    fn delete_case(&self, case_id: &CaseId) -> CustodiaResult<u64> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|r| r.case_id != *case_id);
        Ok((before - records.len()) as u64)
    }
}
