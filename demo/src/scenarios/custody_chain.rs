//! Scenario 2: chain-of-custody events.
//!
//! Uploads evidence, then walks it through acquisition, transfer, access,
//! and two VERIFIED checks — one matching, one deliberately failing. The
//! failed check is recorded with `hash_match = false` and the chain still
//! verifies: a bad integrity check is an auditable fact, not an error.

use std::sync::Arc;

use custodia_contracts::{
    case::{ActorId, CaseId},
    custody::{AccessKind, CustodyEvent, CustodyEventKind},
    error::CustodiaResult,
    evidence::CaptureMetadata,
};
use custodia_core::traits::LedgerStore;
use custodia_custody::{CustodyRecorder, InMemoryCustodyStore};
use custodia_evidence::{sha256_hex, EvidenceIntake, InMemoryEvidenceStore};
use custodia_ledger::{InMemoryLedgerStore, LedgerRecorder};
use custodia_verify::ChainVerifier;

use super::print_chain;

pub fn run() -> CustodiaResult<()> {
    println!("── Scenario 2: chain of custody ──────────────────────────────");

    let ledger = Arc::new(InMemoryLedgerStore::new());
    let recorder = LedgerRecorder::new(ledger.clone());
    let evidence_store = Arc::new(InMemoryEvidenceStore::new());
    let custody_store = Arc::new(InMemoryCustodyStore::new());
    let intake = EvidenceIntake::new(evidence_store.clone(), recorder.clone());
    let custody = CustodyRecorder::new(custody_store.clone(), evidence_store.clone(), recorder);
    let verifier = ChainVerifier::new(ledger.clone());

    let case_id = CaseId::new();
    let investigator = ActorId::new();

    let image_bytes: &[u8] = b"...disk image bytes...";
    let disk_image = intake.ingest_bytes(
        case_id,
        investigator,
        "uploads/laptop.img",
        image_bytes,
        CaptureMetadata {
            file_name: Some("laptop.img".to_string()),
            file_size: Some(image_bytes.len() as u64),
            ..CaptureMetadata::default()
        },
    )?;

    custody.record_event(
        investigator,
        CustodyEvent {
            evidence_id: disk_image.id,
            kind: CustodyEventKind::Acquired,
            reason: "seized under warrant 2026-0142".to_string(),
            notes: Some("imaged on-site, original returned".to_string()),
        },
    )?;
    custody.record_event(
        investigator,
        CustodyEvent {
            evidence_id: disk_image.id,
            kind: CustodyEventKind::Transferred {
                released_by: "Det. Rowan".to_string(),
                received_by: "Forensics lab intake".to_string(),
            },
            reason: "handover for analysis".to_string(),
            notes: None,
        },
    )?;
    custody.record_event(
        investigator,
        CustodyEvent {
            evidence_id: disk_image.id,
            kind: CustodyEventKind::Accessed {
                access_kind: AccessKind::Logical,
            },
            reason: "keyword search over user partition".to_string(),
            notes: None,
        },
    )?;

    // A clean re-hash matches the stored content hash.
    let good = custody.record_event(
        investigator,
        CustodyEvent {
            evidence_id: disk_image.id,
            kind: CustodyEventKind::Verified {
                algorithm: "SHA-256".to_string(),
                supplied_digest: sha256_hex(image_bytes),
            },
            reason: "pre-analysis integrity check".to_string(),
            notes: None,
        },
    )?;
    println!("  VERIFIED (clean copy):   hash_match = {:?}", good.hash_match);

    // A re-hash of a corrupted working copy does not.
    let bad = custody.record_event(
        investigator,
        CustodyEvent {
            evidence_id: disk_image.id,
            kind: CustodyEventKind::Verified {
                algorithm: "SHA-256".to_string(),
                supplied_digest: sha256_hex(b"...corrupted copy..."),
            },
            reason: "post-transport integrity check".to_string(),
            notes: Some("working copy from lab workstation 3".to_string()),
        },
    )?;
    println!("  VERIFIED (bad copy):     hash_match = {:?}", bad.hash_match);
    println!();

    let entries = ledger.entries(&case_id)?;
    print_chain(&entries);

    let verdict = verifier.verify(&case_id)?;
    println!("  verification: {}", verdict);
    println!();

    Ok(())
}
