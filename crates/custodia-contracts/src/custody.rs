//! Chain-of-custody event and record types.
//!
//! Custody events are a specialized event family: each one is persisted as
//! a `CustodyRecord` (independently queryable for the custody UI) and then
//! pushed through the ledger recorder as a `COC_<TYPE>` entry, so every
//! custody event is also chain-protected.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::case::CaseId;
use crate::evidence::EvidenceId;

/// The six kinds of evidence-handling event the custody log recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustodyEventType {
    Acquired,
    Transferred,
    Accessed,
    Verified,
    Stored,
    Disposed,
}

impl CustodyEventType {
    /// The persisted tag fragment, combined with `COC_` for ledger actions.
    pub fn tag(&self) -> &'static str {
        match self {
            CustodyEventType::Acquired => "ACQUIRED",
            CustodyEventType::Transferred => "TRANSFERRED",
            CustodyEventType::Accessed => "ACCESSED",
            CustodyEventType::Verified => "VERIFIED",
            CustodyEventType::Stored => "STORED",
            CustodyEventType::Disposed => "DISPOSED",
        }
    }

    /// Parse a tag fragment (`"VERIFIED"`, …) back into the enum.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ACQUIRED" => Some(CustodyEventType::Acquired),
            "TRANSFERRED" => Some(CustodyEventType::Transferred),
            "ACCESSED" => Some(CustodyEventType::Accessed),
            "VERIFIED" => Some(CustodyEventType::Verified),
            "STORED" => Some(CustodyEventType::Stored),
            "DISPOSED" => Some(CustodyEventType::Disposed),
            _ => None,
        }
    }
}

impl fmt::Display for CustodyEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// How evidence was accessed during an `ACCESSED` custody event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessKind {
    /// Hands-on access to the physical item or original media.
    Physical,
    /// Access to a working copy or image on an analysis workstation.
    Logical,
    /// Access over a remote session or shared viewer.
    Remote,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccessKind::Physical => "physical",
            AccessKind::Logical => "logical",
            AccessKind::Remote => "remote",
        };
        f.write_str(label)
    }
}

/// The type-specific payload of a custody event.
///
/// Variant fields carry exactly what each event type requires; the
/// recorder additionally rejects empty strings before anything is
/// persisted, so invalid events never reach the store or the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustodyEventKind {
    /// Evidence was taken into custody.
    Acquired,

    /// Custody moved from one identified party to another.
    Transferred {
        /// Identity releasing the evidence.
        released_by: String,
        /// Identity receiving the evidence.
        received_by: String,
    },

    /// Evidence was accessed without a custody transfer.
    Accessed { access_kind: AccessKind },

    /// The evidence's content hash was re-computed and compared to the
    /// digest stored at upload.
    Verified {
        /// Name of the hash algorithm used, e.g. `"SHA-256"`.
        algorithm: String,
        /// The digest the verifier computed, lowercase or uppercase hex.
        supplied_digest: String,
    },

    /// Evidence was placed into storage.
    Stored,

    /// Evidence was destroyed or released out of custody.
    Disposed,
}

impl CustodyEventKind {
    /// The event type this payload belongs to.
    pub fn event_type(&self) -> CustodyEventType {
        match self {
            CustodyEventKind::Acquired => CustodyEventType::Acquired,
            CustodyEventKind::Transferred { .. } => CustodyEventType::Transferred,
            CustodyEventKind::Accessed { .. } => CustodyEventType::Accessed,
            CustodyEventKind::Verified { .. } => CustodyEventType::Verified,
            CustodyEventKind::Stored => CustodyEventType::Stored,
            CustodyEventKind::Disposed => CustodyEventType::Disposed,
        }
    }
}

/// A custody event as submitted by the custody UI, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustodyEvent {
    /// The evidence this event concerns.
    pub evidence_id: EvidenceId,

    /// Type-specific payload.
    pub kind: CustodyEventKind,

    /// Free-text justification for the event. Required, non-empty.
    pub reason: String,

    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// Unique identifier for a persisted custody record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustodyRecordId(pub uuid::Uuid);

impl CustodyRecordId {
    /// Create a new, unique custody record ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CustodyRecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CustodyRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated, persisted custody event.
///
/// `case_id` is resolved from the referenced evidence at recording time;
/// `hash_match` is populated only for `Verified` events and records the
/// comparison outcome as-is — a failed integrity check is an auditable
/// fact, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustodyRecord {
    pub id: CustodyRecordId,
    pub case_id: CaseId,
    pub evidence_id: EvidenceId,
    pub kind: CustodyEventKind,
    pub reason: String,
    pub notes: Option<String>,

    /// `Some(outcome)` for `Verified` events; `None` otherwise.
    pub hash_match: Option<bool>,

    /// When the record was created (UTC).
    pub recorded_at: DateTime<Utc>,
}

impl CustodyRecord {
    /// The event type of this record.
    pub fn event_type(&self) -> CustodyEventType {
        self.kind.event_type()
    }
}
