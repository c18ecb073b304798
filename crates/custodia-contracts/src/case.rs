//! Case and actor identity types.
//!
//! These newtypes appear in every ledger entry, evidence record, and custody
//! record. They are intentionally minimal — case metadata (title, overview,
//! findings, team assignments) lives with the CRUD layer, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an investigation case.
///
/// Appears in every audit ledger entry; the hash chain is scoped per case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(pub uuid::Uuid);

impl CaseId {
    /// Create a new, unique case ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a user (investigator or client) acting on a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub uuid::Uuid);

impl ActorId {
    /// Create a new, unique actor ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Human-facing case number, displayed as `CASE-00042`.
///
/// Distinct from [`CaseId`]: the UUID is the stable key, the case number is
/// what investigators quote in reports and ledger detail strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseNumber(pub u32);

impl fmt::Display for CaseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CASE-{:05}", self.0)
    }
}
