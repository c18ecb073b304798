//! Whole-case cascade deletion.
//!
//! A case exclusively owns its custody records, evidence records, and
//! ledger entries. Deleting the case removes all three, in dependency
//! order: custody records reference evidence, and ledger entries are the
//! audit trail for both, so they go last. This is the only code path that
//! removes ledger rows.

use tracing::info;

use custodia_contracts::{case::CaseId, error::CustodiaResult};

use crate::traits::{CustodyStore, EvidenceStore, LedgerStore};

/// Row counts removed by one [`purge_case`] call, per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeSummary {
    pub custody_records: u64,
    pub evidence_records: u64,
    pub ledger_entries: u64,
}

/// Delete everything a case owns, in dependency order.
///
/// Order is custody → evidence → ledger. If a later delete fails, the
/// earlier ones are not rolled back — the caller sees the error and the
/// remaining ledger entries still document what the case contained.
pub fn purge_case(
    case_id: &CaseId,
    custody: &dyn CustodyStore,
    evidence: &dyn EvidenceStore,
    ledger: &dyn LedgerStore,
) -> CustodiaResult<PurgeSummary> {
    let custody_records = custody.delete_case(case_id)?;
    let evidence_records = evidence.delete_case(case_id)?;
    let ledger_entries = ledger.delete_case(case_id)?;

    info!(
        case_id = %case_id,
        custody_records,
        evidence_records,
        ledger_entries,
        "case purged"
    );

    Ok(PurgeSummary {
        custody_records,
        evidence_records,
        ledger_entries,
    })
}
