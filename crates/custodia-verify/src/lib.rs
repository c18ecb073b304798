//! # custodia-verify
//!
//! Hash-chain integrity verification for Custodia case ledgers.
//!
//! This crate provides [`engine::ChainVerifier`], which reads a case's
//! ordered entries through the `LedgerStore` seam and returns a
//! `VerificationResult`: `Valid`, or `Broken` with the first offending
//! position and a `HASH_MISMATCH` / `LINK_MISMATCH` reason.

pub mod engine;

pub use engine::{verify_entries, ChainVerifier};

// ── Tests ─────────────────────────────────────────────────────────────────────
