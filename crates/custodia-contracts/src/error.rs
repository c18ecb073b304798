//! Error types for the Custodia audit core.
//!
//! All fallible operations return `CustodiaResult<T>`. Variants carry
//! enough context for the invoking business handler to decide user-facing
//! behavior — the core itself renders nothing and makes no HTTP decisions.

use thiserror::Error;

/// The unified error type for the Custodia audit core.
#[derive(Debug, Error)]
pub enum CustodiaError {
    /// Input bytes could not be read while computing a content digest.
    ///
    /// Never substituted with a placeholder string — a record must not
    /// claim a hash that was not actually computed.
    #[error("content hash computation failed: {reason}")]
    HashComputation { reason: String },

    /// A concurrent append to the same case won the race.
    ///
    /// The entry's `previous_hash` no longer matches the chain head. The
    /// recorder retries once with a freshly read head; a second conflict
    /// surfaces this error to the caller.
    #[error("ledger append conflict for case {case_id}: expected head {expected}, found {found}")]
    LedgerAppendConflict {
        case_id: String,
        expected: String,
        found: String,
    },

    /// The ledger store could not persist or read an entry.
    ///
    /// Callers treat this as best-effort relative to the triggering
    /// business action, but must surface it to operational logging — a
    /// dropped audit entry is a compliance gap, not a crash.
    #[error("ledger persistence failed: {reason}")]
    LedgerPersistence { reason: String },

    /// A custody event was rejected before any persistence was attempted.
    ///
    /// Invalid custody events never pollute the chain.
    #[error("custody event validation failed: {reason}")]
    CustodyValidation { reason: String },

    /// A custody event referenced evidence that does not exist.
    #[error("evidence {evidence_id} not found")]
    EvidenceNotFound { evidence_id: String },

    /// An evidence or custody store could not persist or read a record.
    #[error("storage unavailable: {reason}")]
    StorageUnavailable { reason: String },
}

/// Convenience alias used throughout the Custodia crates.
pub type CustodiaResult<T> = Result<T, CustodiaError>;
