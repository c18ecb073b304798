//! In-memory implementation of `CustodyStore`.
//!
//! Records are kept in a `Vec` behind a `Mutex` in recording order.

use std::sync::{Arc, Mutex, MutexGuard};

use custodia_contracts::{
    case::CaseId,
    custody::CustodyRecord,
    error::{CustodiaError, CustodiaResult},
    evidence::EvidenceId,
};
use custodia_core::traits::CustodyStore;

/// An in-memory custody store.
#[derive(Clone, Default)]
pub struct InMemoryCustodyStore {
    records: Arc<Mutex<Vec<CustodyRecord>>>,
}

impl InMemoryCustodyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CustodiaResult<MutexGuard<'_, Vec<CustodyRecord>>> {
        self.records
            .lock()
            .map_err(|e| CustodiaError::StorageUnavailable {
                reason: format!("custody store lock poisoned: {}", e),
            })
    }
}

impl CustodyStore for InMemoryCustodyStore {
    fn insert(&self, record: CustodyRecord) -> CustodiaResult<()> {
        self.lock()?.push(record);
        Ok(())
    }

    fn for_evidence(&self, evidence_id: &EvidenceId) -> CustodiaResult<Vec<CustodyRecord>> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .filter(|r| r.evidence_id == *evidence_id)
            .cloned()
            .collect())
    }

    fn for_case(&self, case_id: &CaseId) -> CustodiaResult<Vec<CustodyRecord>> {
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
