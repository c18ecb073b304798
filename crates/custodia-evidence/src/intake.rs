//! Evidence intake.
//!
//! `EvidenceIntake` persists the immutable `EvidenceRecord` created at
//! upload and writes the corresponding ledger entries. The record insert
//! is the primary action; the ledger append is best-effort — an upload
//! must not fail because audit logging is down, but the dropped entry is
//! surfaced to operational logging by the recorder.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use custodia_contracts::{
    action::ActionTag,
    case::{ActorId, CaseId},
    error::{CustodiaError, CustodiaResult},
    evidence::{CaptureMetadata, EvidenceId, EvidenceRecord},
    ledger::LedgerEntry,
};
use custodia_core::traits::EvidenceStore;
use custodia_ledger::LedgerRecorder;

use crate::digest::{normalize_digest, sha256_hex};

/// Handles evidence uploads and access logging.
#[derive(Clone)]
pub struct EvidenceIntake {
    store: Arc<dyn EvidenceStore>,
    recorder: LedgerRecorder,
}

impl EvidenceIntake {
    /// Create an intake over the given evidence store and ledger recorder.
    pub fn new(store: Arc<dyn EvidenceStore>, recorder: LedgerRecorder) -> Self {
        Self { store, recorder }
    }

    /// Persist an evidence record whose content hash was computed client
    /// side, before transmission.
    ///
    /// The digest is validated and normalized to lowercase hex; a
    /// malformed digest is rejected with `HashComputation` before anything
    /// is stored. On success an `EVIDENCE_UPLOADED` ledger entry is
    /// appended best-effort.
    pub fn ingest(
        &self,
        case_id: CaseId,
        actor_id: ActorId,
        file_reference: impl Into<String>,
        content_hash: &str,
        metadata: CaptureMetadata,
    ) -> CustodiaResult<EvidenceRecord> {
        let content_hash = normalize_digest(content_hash)?;
        let file_reference = file_reference.into();

        let record = EvidenceRecord {
            id: EvidenceId::new(),
            case_id,
            file_reference,
            content_hash,
            metadata,
            uploaded_at: Utc::now(),
        };

        self.store.insert(record.clone())?;

        info!(
            case_id = %case_id,
            evidence_id = %record.id,
            content_hash = %record.content_hash,
            "evidence record created"
        );

        let details = format!(
            "Evidence {} uploaded. Hash: {}",
            record.display_name(),
            record.content_hash
        );
        self.recorder
            .append_best_effort(case_id, actor_id, &ActionTag::EvidenceUploaded, details);

        Ok(record)
    }

    /// Convenience for server-side ingestion of in-memory bytes: computes
    /// the digest here, then proceeds as [`EvidenceIntake::ingest`].
    pub fn ingest_bytes(
        &self,
        case_id: CaseId,
        actor_id: ActorId,
        file_reference: impl Into<String>,
        bytes: &[u8],
        metadata: CaptureMetadata,
    ) -> CustodiaResult<EvidenceRecord> {
        let content_hash = sha256_hex(bytes);
        self.ingest(case_id, actor_id, file_reference, &content_hash, metadata)
    }

    /// Record that an actor viewed an item of evidence.
    ///
    /// Returns the appended `EVIDENCE_ACCESSED` entry, or `None` when the
    /// ledger was unavailable (the access itself still happened).
    pub fn record_access(
        &self,
        actor_id: ActorId,
        evidence_id: &EvidenceId,
        note: &str,
    ) -> CustodiaResult<Option<LedgerEntry>> {
        let record = self
            .store
            .get(evidence_id)?
            .ok_or_else(|| CustodiaError::EvidenceNotFound {
                evidence_id: evidence_id.to_string(),
            })?;

        let details = format!("Evidence {} accessed: {}", record.display_name(), note);
        Ok(self.recorder.append_best_effort(
            record.case_id,
            actor_id,
            &ActionTag::EvidenceAccessed,
            details,
        ))
    }
}
