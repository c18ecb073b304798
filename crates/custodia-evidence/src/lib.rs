//! # custodia-evidence
//!
//! Evidence content hashing and intake for the Custodia audit core.
//!
//! Provides the SHA-256 content hasher (the digest computed over file
//! bytes before upload), the `EvidenceIntake` component that persists
//! immutable evidence records and writes `EVIDENCE_UPLOADED` /
//! `EVIDENCE_ACCESSED` ledger entries, and the in-memory `EvidenceStore`
//! reference implementation.

pub mod digest;
pub mod intake;
pub mod memory;

pub use digest::{normalize_digest, sha256_hex, sha256_hex_reader};
pub use intake::EvidenceIntake;
pub use memory::InMemoryEvidenceStore;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};
    use std::sync::Arc;

    use custodia_contracts::{
        case::{ActorId, CaseId},
        error::{CustodiaError, CustodiaResult},
        evidence::CaptureMetadata,
        ledger::LedgerEntry,
    };
    use custodia_core::traits::{EvidenceStore, LedgerStore};
    use custodia_ledger::{InMemoryLedgerStore, LedgerRecorder};

    use super::{digest, EvidenceIntake, InMemoryEvidenceStore};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn setup() -> (EvidenceIntake, Arc<InMemoryEvidenceStore>, Arc<InMemoryLedgerStore>) {
        let evidence = Arc::new(InMemoryEvidenceStore::new());
        let ledger = Arc::new(InMemoryLedgerStore::new());
        let intake = EvidenceIntake::new(evidence.clone(), LedgerRecorder::new(ledger.clone()));
        (intake, evidence, ledger)
    }

    fn photo_metadata() -> CaptureMetadata {
        CaptureMetadata {
            file_name: Some("photo.jpg".to_string()),
            file_size: Some(2_048_576),
            mime_type: Some("image/jpeg".to_string()),
            device_make: Some("Canon".to_string()),
            device_model: Some("EOS R5".to_string()),
            ..CaptureMetadata::default()
        }
    }

    // ── Content hasher ────────────────────────────────────────────────────────

    /// Known SHA-256 vectors: the hasher must match any other correct
    /// implementation byte for byte.
    #[test]
    fn sha256_known_vectors() {
        assert_eq!(
            digest::sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            digest::sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    /// Streaming and in-memory digests agree, including across chunk
    /// boundaries.
    #[test]
    fn reader_digest_matches_bytes_digest() {
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let from_reader = digest::sha256_hex_reader(Cursor::new(&data)).unwrap();
        assert_eq!(from_reader, digest::sha256_hex(&data));
    }

    /// An unreadable input yields an explicit error, never a placeholder.
    #[test]
    fn unreadable_input_is_an_error() {
        struct BrokenReader;
        impl Read for BrokenReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "device reset"))
            }
        }

        let err = digest::sha256_hex_reader(BrokenReader).unwrap_err();
        assert!(matches!(err, CustodiaError::HashComputation { .. }));
        assert!(err.to_string().contains("device reset"));
    }

    #[test]
    fn normalize_digest_lowercases_and_validates() {
        let upper = "AB".repeat(32);
        assert_eq!(digest::normalize_digest(&upper).unwrap(), "ab".repeat(32));

        assert!(digest::normalize_digest("abc123").is_err());
        assert!(digest::normalize_digest(&"zz".repeat(32)).is_err());
    }

    // ── Intake ────────────────────────────────────────────────────────────────

    /// Ingesting bytes persists the record and appends an
    /// EVIDENCE_UPLOADED entry whose details carry the digest.
    #[test]
    fn ingest_bytes_persists_and_audits() {
        let (intake, evidence, ledger) = setup();
        let case_id = CaseId::new();

        let record = intake
            .ingest_bytes(
                case_id,
                ActorId::new(),
                "uploads/photo.jpg",
                b"jpeg bytes",
                photo_metadata(),
            )
            .unwrap();

        assert_eq!(record.content_hash, digest::sha256_hex(b"jpeg bytes"));
        assert_eq!(evidence.for_case(&case_id).unwrap().len(), 1);

        let entries = ledger.entries(&case_id).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, "EVIDENCE_UPLOADED");
        assert!(entries[0].details.contains("photo.jpg"));
        assert!(entries[0].details.contains(&record.content_hash));
    }

    /// A malformed client-supplied digest is rejected before anything is
    /// persisted.
    #[test]
    fn malformed_client_digest_rejected() {
        let (intake, evidence, ledger) = setup();
        let case_id = CaseId::new();

        let err = intake
            .ingest(
                case_id,
                ActorId::new(),
                "uploads/disk.img",
                "not-a-digest",
                CaptureMetadata::default(),
            )
            .unwrap_err();

        assert!(matches!(err, CustodiaError::HashComputation { .. }));
        assert!(evidence.for_case(&case_id).unwrap().is_empty());
        assert!(ledger.entries(&case_id).unwrap().is_empty());
    }

    /// A ledger store that is always down.
    struct DownLedger;

    impl LedgerStore for DownLedger {
        fn append(&self, _entry: LedgerEntry) -> CustodiaResult<LedgerEntry> {
            Err(CustodiaError::LedgerPersistence {
                reason: "connection refused".to_string(),
            })
        }
        fn most_recent(&self, _case_id: &CaseId) -> CustodiaResult<Option<LedgerEntry>> {
            Err(CustodiaError::LedgerPersistence {
                reason: "connection refused".to_string(),
            })
        }
        fn entries(&self, _case_id: &CaseId) -> CustodiaResult<Vec<LedgerEntry>> {
            Err(CustodiaError::LedgerPersistence {
                reason: "connection refused".to_string(),
            })
        }
        fn delete_case(&self, _case_id: &CaseId) -> CustodiaResult<u64> {
            Err(CustodiaError::LedgerPersistence {
                reason: "connection refused".to_string(),
            })
        }
    }

    /// Audit logging is best-effort relative to the upload: the evidence
    /// record still lands when the ledger is unavailable.
    #[test]
    fn upload_succeeds_when_ledger_is_down() {
        let evidence = Arc::new(InMemoryEvidenceStore::new());
        let intake =
            EvidenceIntake::new(evidence.clone(), LedgerRecorder::new(Arc::new(DownLedger)));
        let case_id = CaseId::new();

        let record = intake
            .ingest_bytes(
                case_id,
                ActorId::new(),
                "uploads/report.pdf",
                b"pdf bytes",
                CaptureMetadata::default(),
            )
            .unwrap();

        assert_eq!(evidence.get(&record.id).unwrap().unwrap().id, record.id);
    }

    // ── Access logging ────────────────────────────────────────────────────────

    #[test]
    fn record_access_appends_entry() {
        let (intake, _, ledger) = setup();
        let case_id = CaseId::new();
        let actor_id = ActorId::new();

        let record = intake
            .ingest_bytes(case_id, actor_id, "uploads/photo.jpg", b"x", photo_metadata())
            .unwrap();

        let entry = intake
            .record_access(actor_id, &record.id, "opened in viewer")
            .unwrap()
            .expect("ledger is up, entry must be returned");

        assert_eq!(entry.action, "EVIDENCE_ACCESSED");
        assert!(entry.details.contains("photo.jpg"));
        assert_eq!(ledger.entries(&case_id).unwrap().len(), 2);
    }

    #[test]
    fn record_access_unknown_evidence_fails() {
        let (intake, _, _) = setup();

        let err = intake
            .record_access(
                ActorId::new(),
                &custodia_contracts::evidence::EvidenceId::new(),
                "peek",
            )
            .unwrap_err();

        assert!(matches!(err, CustodiaError::EvidenceNotFound { .. }));
    }

    // ── Store semantics ───────────────────────────────────────────────────────

    #[test]
    fn delete_case_removes_only_that_case() {
        let (intake, evidence, _) = setup();
        let case_a = CaseId::new();
        let case_b = CaseId::new();
        let actor_id = ActorId::new();

        intake
            .ingest_bytes(case_a, actor_id, "a/1.bin", b"1", CaptureMetadata::default())
            .unwrap();
        intake
            .ingest_bytes(case_a, actor_id, "a/2.bin", b"2", CaptureMetadata::default())
            .unwrap();
        intake
            .ingest_bytes(case_b, actor_id, "b/1.bin", b"3", CaptureMetadata::default())
            .unwrap();

        assert_eq!(evidence.delete_case(&case_a).unwrap(), 2);
        assert!(evidence.for_case(&case_a).unwrap().is_empty());
        assert_eq!(evidence.for_case(&case_b).unwrap().len(), 1);
    }
}
