//! Demo scenarios and shared display helpers.

pub mod case_lifecycle;
pub mod custody_chain;
pub mod tamper_detection;

use custodia_contracts::{action::display_label, ledger::LedgerEntry};

/// Print one case chain as a table with truncated hashes.
///
/// Verifiers use the full hashes; truncation here is display-only.
pub fn print_chain(entries: &[LedgerEntry]) {
    println!(
        "  {:<4} {:<22} {:<14} {:<14} details",
        "seq", "action", "prev", "hash"
    );
    for entry in entries {
        println!(
            "  {:<4} {:<22} {:<14} {:<14} {}",
            entry.sequence,
            display_label(&entry.action),
            &entry.previous_hash[..12],
            entry.short_hash(),
            entry.details
        );
    }
}
