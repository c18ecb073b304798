//! # custodia-core
//!
//! Storage trait seams and whole-case teardown for the Custodia audit core.
//!
//! This crate provides:
//! - The three store traits (`LedgerStore`, `EvidenceStore`, `CustodyStore`)
//! - [`teardown::purge_case`], the only path that removes ledger rows
//!
//! ## Usage
//!
//! ```rust,ignore
//! use custodia_core::traits::{LedgerStore, EvidenceStore, CustodyStore};
//! ```

pub mod teardown;
pub mod traits;

pub use teardown::{purge_case, PurgeSummary};
