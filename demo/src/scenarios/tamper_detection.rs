//! Scenario 3: tamper detection.
//!
//! Builds a small valid chain, then shows the two fault classes the
//! verifier distinguishes: a row whose fields were rewritten in place
//! (HASH_MISMATCH) and a deleted interior row (LINK_MISMATCH). The
//! tampered copies are plain snapshots — the store itself exposes no
//! mutation path, which is exactly the point.

use std::sync::Arc;

use custodia_contracts::{
    action::ActionTag,
    case::{ActorId, CaseId},
    error::CustodiaResult,
};
use custodia_core::traits::LedgerStore;
use custodia_ledger::{InMemoryLedgerStore, LedgerRecorder};
use custodia_verify::{verify_entries, ChainVerifier};

use super::print_chain;

pub fn run() -> CustodiaResult<()> {
    println!("── Scenario 3: tamper detection ──────────────────────────────");

    let ledger = Arc::new(InMemoryLedgerStore::new());
    let recorder = LedgerRecorder::new(ledger.clone());
    let verifier = ChainVerifier::new(ledger.clone());

    let case_id = CaseId::new();
    let investigator = ActorId::new();

    recorder.append(case_id, investigator, &ActionTag::CaseCreated, "Case CASE-00007 created")?;
    recorder.append(
        case_id,
        investigator,
        &ActionTag::EvidenceUploaded,
        "Evidence usb-stick.img uploaded. Hash: 9f2c...",
    )?;
    recorder.append(
        case_id,
        investigator,
        &ActionTag::OverviewModified,
        "Overview updated: suspect interviewed",
    )?;
    recorder.append(
        case_id,
        investigator,
        &ActionTag::FindingsModified,
        "Findings updated: deleted files recovered",
    )?;

    let entries = ledger.entries(&case_id)?;
    print_chain(&entries);
    println!("  pristine chain: {}", verifier.verify(&case_id)?);
    println!();

    // Rewrite a row in place without recomputing its hash.
    let mut edited = entries.clone();
    edited[2].details = "Overview updated: nothing of note".to_string();
    println!("  after editing entry 2's details: {}", verify_entries(&edited));

    // Remove an interior row.
    let mut truncated = entries.clone();
    truncated.remove(1);
    println!("  after deleting entry 1:          {}", verify_entries(&truncated));

    // Swap two rows.
    let mut reordered = entries;
    reordered.swap(2, 3);
    println!("  after reordering entries 2 & 3:  {}", verify_entries(&reordered));
    println!();

    Ok(())
}
