//! Scenario 1: full case lifecycle.
//!
//! Creates a case, uploads evidence (hashing the bytes at intake), edits
//! the overview and findings, logs an evidence view, verifies the chain,
//! and finally purges the case in cascade order.

use std::sync::Arc;

use custodia_contracts::{
    action::ActionTag,
    case::{ActorId, CaseId, CaseNumber},
    error::CustodiaResult,
    evidence::CaptureMetadata,
};
use custodia_evidence::{EvidenceIntake, InMemoryEvidenceStore};
use custodia_ledger::{InMemoryLedgerStore, LedgerRecorder};
use custodia_verify::ChainVerifier;

use super::print_chain;

pub fn run() -> CustodiaResult<()> {
    println!("── Scenario 1: case lifecycle ────────────────────────────────");

    let ledger = Arc::new(InMemoryLedgerStore::new());
    let recorder = LedgerRecorder::new(ledger.clone());
    let evidence_store = Arc::new(InMemoryEvidenceStore::new());
    let custody_store = Arc::new(custodia_custody::InMemoryCustodyStore::new());
    let intake = EvidenceIntake::new(evidence_store.clone(), recorder.clone());
    let verifier = ChainVerifier::new(ledger.clone());

    let case_id = CaseId::new();
    let case_number = CaseNumber(1);
    let investigator = ActorId::new();

    recorder.append(
        case_id,
        investigator,
        &ActionTag::CaseCreated,
        format!("Case {} created", case_number),
    )?;

    let photo = intake.ingest_bytes(
        case_id,
        investigator,
        "uploads/photo.jpg",
        b"...jpeg bytes...",
        CaptureMetadata {
            file_name: Some("photo.jpg".to_string()),
            file_size: Some(16),
            mime_type: Some("image/jpeg".to_string()),
            device_make: Some("Canon".to_string()),
            device_model: Some("EOS R5".to_string()),
            ..CaptureMetadata::default()
        },
    )?;

    recorder.append(
        case_id,
        investigator,
        &ActionTag::OverviewModified,
        "Overview updated: initial scope drafted",
    )?;
    recorder.append(
        case_id,
        investigator,
        &ActionTag::FindingsModified,
        "Findings updated: EXIF timestamps consistent with statement",
    )?;
    intake.record_access(investigator, &photo.id, "opened in viewer")?;

    let export = recorder.export(case_id)?;
    print_chain(&export.entries);
    println!("  head hash: {}", export.head_hash);

    let verdict = verifier.verify(&case_id)?;
    println!("  verification: {}", verdict);

    let summary = custodia_core::purge_case(
        &case_id,
        custody_store.as_ref(),
        evidence_store.as_ref(),
        ledger.as_ref(),
    )?;
    println!(
        "  purged: {} custody, {} evidence, {} ledger rows",
        summary.custody_records, summary.evidence_records, summary.ledger_entries
    );
    println!();

    Ok(())
}
