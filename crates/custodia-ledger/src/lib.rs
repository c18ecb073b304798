//! # custodia-ledger
//!
//! Append-only, SHA-256 hash-chained audit ledger for Custodia cases.
//!
//! ## Overview
//!
//! Every security-relevant action on a case — creation, evidence upload and
//! access, overview/findings edits, custody events — is recorded as a
//! `LedgerEntry` that links to the previous entry for the same case via its
//! SHA-256 hash. Tampering with any stored entry, or removing or reordering
//! entries, breaks the chain and is detected by the verifier.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use custodia_ledger::{InMemoryLedgerStore, LedgerRecorder};
//! use custodia_contracts::action::ActionTag;
//!
//! let store = Arc::new(InMemoryLedgerStore::new());
//! let recorder = LedgerRecorder::new(store);
//! recorder.append(case_id, actor_id, &ActionTag::CaseCreated, "Case CASE-00001 created")?;
//! ```

pub mod chain;
pub mod memory;
pub mod recorder;

pub use chain::{hash_entry, preimage, recompute_hash};
pub use memory::InMemoryLedgerStore;
pub use recorder::LedgerRecorder;

// ── Tests ─────────────────────────────────────────────────────────────────────
