//! The chain-of-custody recorder.
//!
//! Every custody event is validated, persisted as a `CustodyRecord`
//! (independently queryable for the custody UI), and then pushed through
//! the ledger recorder as a `COC_<TYPE>` entry so the event itself is
//! chain-protected. Validation happens before any persistence — invalid
//! events never pollute the chain.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use custodia_contracts::{
    action::ActionTag,
    case::ActorId,
    custody::{CustodyEvent, CustodyEventKind, CustodyRecord, CustodyRecordId},
    error::{CustodiaError, CustodiaResult},
    evidence::EvidenceRecord,
};
use custodia_core::traits::{CustodyStore, EvidenceStore};
use custodia_ledger::LedgerRecorder;

/// Records chain-of-custody events against case evidence.
#[derive(Clone)]
pub struct CustodyRecorder {
    custody: Arc<dyn CustodyStore>,
    evidence: Arc<dyn EvidenceStore>,
    ledger: LedgerRecorder,
}

impl CustodyRecorder {
    /// Create a recorder over the given stores and ledger recorder.
    pub fn new(
        custody: Arc<dyn CustodyStore>,
        evidence: Arc<dyn EvidenceStore>,
        ledger: LedgerRecorder,
    ) -> Self {
        Self {
            custody,
            evidence,
            ledger,
        }
    }

    /// Validate, persist, and chain-protect one custody event.
    ///
    /// For `Verified` events the evidence's stored `content_hash` is
    /// compared (ASCII case-insensitive) to the verifier-supplied digest
    /// and the outcome recorded as-is — a failed integrity check is an
    /// auditable fact, not an error to suppress.
    ///
    /// The custody record insert is the primary action. The `COC_<TYPE>`
    /// ledger append is best-effort: its failure is surfaced to
    /// operational logging but does not fail the event.
    pub fn record_event(
        &self,
        actor_id: ActorId,
        event: CustodyEvent,
    ) -> CustodiaResult<CustodyRecord> {
        validate(&event)?;

        let evidence = self
            .evidence
            .get(&event.evidence_id)?
            .ok_or_else(|| CustodiaError::EvidenceNotFound {
                evidence_id: event.evidence_id.to_string(),
            })?;

        let hash_match = match &event.kind {
            CustodyEventKind::Verified {
                supplied_digest, ..
            } => Some(supplied_digest.eq_ignore_ascii_case(&evidence.content_hash)),
            _ => None,
        };

        if hash_match == Some(false) {
            warn!(
                evidence_id = %evidence.id,
                case_id = %evidence.case_id,
                "custody verification digest does not match stored content hash"
            );
        }

        let record = CustodyRecord {
            id: CustodyRecordId::new(),
            case_id: evidence.case_id,
            evidence_id: evidence.id,
            kind: event.kind,
            reason: event.reason,
            notes: event.notes,
            hash_match,
            recorded_at: Utc::now(),
        };

        self.custody.insert(record.clone())?;

        info!(
            case_id = %record.case_id,
            evidence_id = %record.evidence_id,
            event_type = %record.event_type(),
            "custody event recorded"
        );

        let details = summarize(&record, &evidence);
        self.ledger.append_best_effort(
            record.case_id,
            actor_id,
            &ActionTag::Custody(record.event_type()),
            details,
        );

        Ok(record)
    }
}

/// Reject events with missing type-specific fields before any persistence.
fn validate(event: &CustodyEvent) -> CustodiaResult<()> {
    if event.reason.trim().is_empty() {
        return Err(CustodiaError::CustodyValidation {
            reason: "a custody event requires a non-empty reason".to_string(),
        });
    }

    match &event.kind {
        CustodyEventKind::Transferred {
            released_by,
            received_by,
        } => {
            if released_by.trim().is_empty() {
                return Err(CustodiaError::CustodyValidation {
                    reason: "TRANSFERRED requires a releasing identity".to_string(),
                });
            }
            if received_by.trim().is_empty() {
                return Err(CustodiaError::CustodyValidation {
                    reason: "TRANSFERRED requires a receiving identity".to_string(),
                });
            }
        }
        CustodyEventKind::Verified {
            algorithm,
            supplied_digest,
        } => {
            if algorithm.trim().is_empty() {
                return Err(CustodiaError::CustodyValidation {
                    reason: "VERIFIED requires a hash algorithm name".to_string(),
                });
            }
            if supplied_digest.trim().is_empty() {
                return Err(CustodiaError::CustodyValidation {
                    reason: "VERIFIED requires the computed digest".to_string(),
                });
            }
        }
        CustodyEventKind::Acquired
        | CustodyEventKind::Accessed { .. }
        | CustodyEventKind::Stored
        | CustodyEventKind::Disposed => {}
    }

    Ok(())
}

/// Build the ledger `details` line for a custody record.
fn summarize(record: &CustodyRecord, evidence: &EvidenceRecord) -> String {
    let base = format!(
        "Custody {} for evidence {}: {}",
        record.event_type(),
        evidence.display_name(),
        record.reason
    );

    match (&record.kind, record.hash_match) {
        (
            CustodyEventKind::Transferred {
                released_by,
                received_by,
            },
            _,
        ) => format!("{} (released by {}, received by {})", base, released_by, received_by),
        (CustodyEventKind::Accessed { access_kind }, _) => {
            format!("{} ({} access)", base, access_kind)
        }
        (CustodyEventKind::Verified { algorithm, .. }, Some(matched)) => {
            format!("{} ({} match: {})", base, algorithm, matched)
        }
        _ => base,
    }
}
