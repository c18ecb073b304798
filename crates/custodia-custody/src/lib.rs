//! # custodia-custody
//!
//! Chain-of-custody event recording for the Custodia audit core.
//!
//! Custody events (acquisition, transfer, access, verification, storage,
//! disposal) are validated, persisted as queryable `CustodyRecord`s, and
//! chain-protected via `COC_<TYPE>` ledger entries. A `VERIFIED` event
//! cross-references the evidence's stored content hash and records the
//! comparison outcome even when it fails.

pub mod memory;
pub mod recorder;

pub use memory::InMemoryCustodyStore;
pub use recorder::CustodyRecorder;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use custodia_contracts::{
        case::{ActorId, CaseId},
        custody::{AccessKind, CustodyEvent, CustodyEventKind},
        error::{CustodiaError, CustodiaResult},
        evidence::{CaptureMetadata, EvidenceRecord},
        ledger::LedgerEntry,
        verify::VerificationResult,
    };
    use custodia_core::traits::{CustodyStore, EvidenceStore, LedgerStore};
    use custodia_evidence::{sha256_hex, EvidenceIntake, InMemoryEvidenceStore};
    use custodia_ledger::{InMemoryLedgerStore, LedgerRecorder};
    use custodia_verify::ChainVerifier;

    use super::{CustodyRecorder, InMemoryCustodyStore};

    // ── Helpers ───────────────────────────────────────────────────────────────

    struct Fixture {
        recorder: CustodyRecorder,
        custody: Arc<InMemoryCustodyStore>,
        evidence_store: Arc<InMemoryEvidenceStore>,
        ledger: Arc<InMemoryLedgerStore>,
        case_id: CaseId,
        actor_id: ActorId,
        evidence: EvidenceRecord,
    }

    /// One case with one ingested evidence file (`photo.jpg`, bytes `b"jpeg"`).
    fn fixture() -> Fixture {
        let custody = Arc::new(InMemoryCustodyStore::new());
        let evidence_store = Arc::new(InMemoryEvidenceStore::new());
        let ledger = Arc::new(InMemoryLedgerStore::new());
        let ledger_recorder = LedgerRecorder::new(ledger.clone());

        let case_id = CaseId::new();
        let actor_id = ActorId::new();

        let intake = EvidenceIntake::new(evidence_store.clone(), ledger_recorder.clone());
        let evidence = intake
            .ingest_bytes(
                case_id,
                actor_id,
                "uploads/photo.jpg",
                b"jpeg",
                CaptureMetadata {
                    file_name: Some("photo.jpg".to_string()),
                    ..CaptureMetadata::default()
                },
            )
            .unwrap();

        let recorder = CustodyRecorder::new(
            custody.clone(),
            evidence_store.clone(),
            ledger_recorder,
        );

        Fixture {
            recorder,
            custody,
            evidence_store,
            ledger,
            case_id,
            actor_id,
            evidence,
        }
    }

    fn verified_event(fx: &Fixture, digest: &str) -> CustodyEvent {
        CustodyEvent {
            evidence_id: fx.evidence.id,
            kind: CustodyEventKind::Verified {
                algorithm: "SHA-256".to_string(),
                supplied_digest: digest.to_string(),
            },
            reason: "quarterly integrity check".to_string(),
            notes: None,
        }
    }

    // ── VERIFIED cross-reference ──────────────────────────────────────────────

    /// A failed integrity check persists `hash_match = false` and still
    /// produces exactly one new, validly-chained ledger entry.
    #[test]
    fn failed_verification_is_recorded_not_suppressed() {
        let fx = fixture();
        let before = fx.ledger.entries(&fx.case_id).unwrap().len();

        let wrong_digest = sha256_hex(b"tampered bytes");
        let record = fx
            .recorder
            .record_event(fx.actor_id, verified_event(&fx, &wrong_digest))
            .unwrap();

        assert_eq!(record.hash_match, Some(false));

        let entries = fx.ledger.entries(&fx.case_id).unwrap();
        assert_eq!(entries.len(), before + 1);
        let last = entries.last().unwrap();
        assert_eq!(last.action, "COC_VERIFIED");
        assert!(last.details.contains("match: false"));

        let verifier = ChainVerifier::new(fx.ledger.clone());
        assert_eq!(
            verifier.verify(&fx.case_id).unwrap(),
            VerificationResult::Valid
        );
    }

    /// A matching digest records `hash_match = true`; comparison is ASCII
    /// case-insensitive so uppercase hex from external tools still matches.
    #[test]
    fn matching_verification_is_case_insensitive() {
        let fx = fixture();

        let digest = sha256_hex(b"jpeg").to_ascii_uppercase();
        let record = fx
            .recorder
            .record_event(fx.actor_id, verified_event(&fx, &digest))
            .unwrap();

        assert_eq!(record.hash_match, Some(true));
        let entries = fx.ledger.entries(&fx.case_id).unwrap();
        assert!(entries.last().unwrap().details.contains("match: true"));
    }

    // ── Validation ────────────────────────────────────────────────────────────

    /// Invalid events are rejected before any persistence: no custody
    /// record, no ledger entry.
    #[test]
    fn transfer_missing_receiver_rejected() {
        let fx = fixture();
        let before = fx.ledger.entries(&fx.case_id).unwrap().len();

        let err = fx
            .recorder
            .record_event(
                fx.actor_id,
                CustodyEvent {
                    evidence_id: fx.evidence.id,
                    kind: CustodyEventKind::Transferred {
                        released_by: "Det. Rowan".to_string(),
                        received_by: "  ".to_string(),
                    },
                    reason: "handover to lab".to_string(),
                    notes: None,
                },
            )
            .unwrap_err();

        assert!(matches!(err, CustodiaError::CustodyValidation { .. }));
        assert!(fx.custody.for_case(&fx.case_id).unwrap().is_empty());
        assert_eq!(fx.ledger.entries(&fx.case_id).unwrap().len(), before);
    }

    #[test]
    fn empty_reason_rejected() {
        let fx = fixture();

        let err = fx
            .recorder
            .record_event(
                fx.actor_id,
                CustodyEvent {
                    evidence_id: fx.evidence.id,
                    kind: CustodyEventKind::Acquired,
                    reason: String::new(),
                    notes: None,
                },
            )
            .unwrap_err();

        assert!(matches!(err, CustodiaError::CustodyValidation { .. }));
    }

    #[test]
    fn verified_missing_algorithm_rejected() {
        let fx = fixture();

        let err = fx
            .recorder
            .record_event(
                fx.actor_id,
                CustodyEvent {
                    evidence_id: fx.evidence.id,
                    kind: CustodyEventKind::Verified {
                        algorithm: String::new(),
                        supplied_digest: sha256_hex(b"jpeg"),
                    },
                    reason: "integrity check".to_string(),
                    notes: None,
                },
            )
            .unwrap_err();

        assert!(matches!(err, CustodiaError::CustodyValidation { .. }));
    }

    #[test]
    fn unknown_evidence_rejected() {
        let fx = fixture();

        let err = fx
            .recorder
            .record_event(
                fx.actor_id,
                CustodyEvent {
                    evidence_id: custodia_contracts::evidence::EvidenceId::new(),
                    kind: CustodyEventKind::Stored,
                    reason: "into the vault".to_string(),
                    notes: None,
                },
            )
            .unwrap_err();

        assert!(matches!(err, CustodiaError::EvidenceNotFound { .. }));
    }

    // ── Event recording ───────────────────────────────────────────────────────

    /// Non-VERIFIED events carry no hash_match and still land on the chain
    /// with the right `COC_<TYPE>` action.
    #[test]
    fn acquisition_event_recorded_and_chained() {
        let fx = fixture();

        let record = fx
            .recorder
            .record_event(
                fx.actor_id,
                CustodyEvent {
                    evidence_id: fx.evidence.id,
                    kind: CustodyEventKind::Acquired,
                    reason: "seized at scene".to_string(),
                    notes: Some("bagged and tagged".to_string()),
                },
            )
            .unwrap();

        assert_eq!(record.hash_match, None);
        assert_eq!(record.case_id, fx.case_id);

        let entries = fx.ledger.entries(&fx.case_id).unwrap();
        assert_eq!(entries.last().unwrap().action, "COC_ACQUIRED");

        let by_evidence = fx.custody.for_evidence(&fx.evidence.id).unwrap();
        assert_eq!(by_evidence.len(), 1);
        assert_eq!(by_evidence[0].id, record.id);
    }

    /// Access events carry their classification into the details line.
    #[test]
    fn access_event_details_include_classification() {
        let fx = fixture();

        fx.recorder
            .record_event(
                fx.actor_id,
                CustodyEvent {
                    evidence_id: fx.evidence.id,
                    kind: CustodyEventKind::Accessed {
                        access_kind: AccessKind::Logical,
                    },
                    reason: "keyword search".to_string(),
                    notes: None,
                },
            )
            .unwrap();

        let entries = fx.ledger.entries(&fx.case_id).unwrap();
        let last = entries.last().unwrap();
        assert_eq!(last.action, "COC_ACCESSED");
        assert!(last.details.contains("logical access"));
    }

    /// The custody record is the primary action: it still lands when the
    /// ledger is unavailable.
    #[test]
    fn custody_record_survives_ledger_outage() {
        struct DownLedger;
        impl LedgerStore for DownLedger {
            fn append(&self, _entry: LedgerEntry) -> CustodiaResult<LedgerEntry> {
                Err(CustodiaError::LedgerPersistence {
                    reason: "disk full".to_string(),
                })
            }
            fn most_recent(&self, _case_id: &CaseId) -> CustodiaResult<Option<LedgerEntry>> {
                Err(CustodiaError::LedgerPersistence {
                    reason: "disk full".to_string(),
                })
            }
            fn entries(&self, _case_id: &CaseId) -> CustodiaResult<Vec<LedgerEntry>> {
                Err(CustodiaError::LedgerPersistence {
                    reason: "disk full".to_string(),
                })
            }
            fn delete_case(&self, _case_id: &CaseId) -> CustodiaResult<u64> {
                Err(CustodiaError::LedgerPersistence {
                    reason: "disk full".to_string(),
                })
            }
        }

        let fx = fixture();
        let recorder = CustodyRecorder::new(
            fx.custody.clone(),
            fx.evidence_store.clone(),
            LedgerRecorder::new(Arc::new(DownLedger)),
        );

        let record = recorder
            .record_event(
                fx.actor_id,
                CustodyEvent {
                    evidence_id: fx.evidence.id,
                    kind: CustodyEventKind::Stored,
                    reason: "long-term storage".to_string(),
                    notes: None,
                },
            )
            .unwrap();

        assert_eq!(fx.custody.for_case(&fx.case_id).unwrap().len(), 1);
        assert_eq!(record.hash_match, None);
    }

    // ── Whole-case teardown ───────────────────────────────────────────────────

    /// Cascade deletion removes custody, evidence, and ledger rows in
    /// dependency order and reports accurate counts.
    #[test]
    fn purge_case_cascades_in_order() {
        let fx = fixture();

        fx.recorder
            .record_event(
                fx.actor_id,
                CustodyEvent {
                    evidence_id: fx.evidence.id,
                    kind: CustodyEventKind::Acquired,
                    reason: "seized at scene".to_string(),
                    notes: None,
                },
            )
            .unwrap();
        fx.recorder
            .record_event(
                fx.actor_id,
                CustodyEvent {
                    evidence_id: fx.evidence.id,
                    kind: CustodyEventKind::Stored,
                    reason: "into the vault".to_string(),
                    notes: None,
                },
            )
            .unwrap();

        let summary = custodia_core::purge_case(
            &fx.case_id,
            fx.custody.as_ref(),
            fx.evidence_store.as_ref(),
            fx.ledger.as_ref(),
        )
        .unwrap();

        // 1 upload entry + 2 custody entries.
        assert_eq!(summary.custody_records, 2);
        assert_eq!(summary.evidence_records, 1);
        assert_eq!(summary.ledger_entries, 3);

        assert!(fx.custody.for_case(&fx.case_id).unwrap().is_empty());
        assert!(fx.evidence_store.for_case(&fx.case_id).unwrap().is_empty());
        assert!(fx.ledger.entries(&fx.case_id).unwrap().is_empty());
    }
}
