//! Chain verification verdict types.
//!
//! `verify(case_id)` walks a case's ordered entries and either confirms the
//! chain or pinpoints the first entry at which it breaks. A broken chain is
//! a verdict, never auto-repaired and never silently skipped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a chain failed verification at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainFault {
    /// The entry's stored `entry_hash` does not match a recomputation from
    /// its own fields — the row was altered after the fact.
    HashMismatch,

    /// The entry's stored `previous_hash` does not match the preceding
    /// entry's hash — an entry was deleted, inserted, or reordered.
    LinkMismatch,
}

impl ChainFault {
    /// Stable reason code for logs and operator tooling.
    pub fn code(&self) -> &'static str {
        match self {
            ChainFault::HashMismatch => "HASH_MISMATCH",
            ChainFault::LinkMismatch => "LINK_MISMATCH",
        }
    }
}

impl fmt::Display for ChainFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The outcome of walking one case's hash chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationResult {
    /// Every entry's hash recomputes correctly and every link holds.
    /// An empty chain is trivially valid.
    Valid,

    /// The chain breaks at `position` (0-based index into the ordered
    /// entries). Verification short-circuits at the first fault.
    Broken { position: usize, reason: ChainFault },
}

impl VerificationResult {
    /// True when the chain verified clean.
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationResult::Valid)
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationResult::Valid => f.write_str("valid"),
            VerificationResult::Broken { position, reason } => {
                write!(f, "broken at entry {} ({})", position, reason)
            }
        }
    }
}
