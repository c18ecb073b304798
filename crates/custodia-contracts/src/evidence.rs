//! Evidence record and capture-metadata types.
//!
//! An `EvidenceRecord` is created once at upload and never updated. Its
//! `content_hash` — computed over the file bytes before transmission — is
//! the anchor that later chain-of-custody VERIFIED events compare against.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::case::CaseId;

/// Unique identifier for one item of evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceId(pub uuid::Uuid);

impl EvidenceId {
    /// Create a new, unique evidence ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for EvidenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An immutable record of one uploaded evidence file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub id: EvidenceId,

    /// The case this evidence belongs to.
    pub case_id: CaseId,

    /// Opaque storage locator (object key, path, …). The core never opens it.
    pub file_reference: String,

    /// Lowercase hex SHA-256 of the file bytes, computed before upload.
    pub content_hash: String,

    /// Attributes extracted from the file at upload time. Any subset may be
    /// absent.
    pub metadata: CaptureMetadata,

    /// When the record was created (UTC).
    pub uploaded_at: DateTime<Utc>,
}

impl EvidenceRecord {
    /// The name shown in ledger detail strings and listings: the uploaded
    /// file name when present, otherwise the storage locator.
    pub fn display_name(&self) -> &str {
        self.metadata
            .file_name
            .as_deref()
            .unwrap_or(&self.file_reference)
    }
}

/// Descriptive and capture metadata extracted from an evidence file.
///
/// Mirrors what the upload page pulls out of EXIF plus basic file
/// attributes. Everything is optional — plenty of evidence carries no
/// embedded metadata at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureMetadata {
    /// Original file name as uploaded.
    pub file_name: Option<String>,

    /// File size in bytes.
    pub file_size: Option<u64>,

    /// MIME type reported at upload.
    pub mime_type: Option<String>,

    /// Capturing device manufacturer (EXIF `Make`).
    pub device_make: Option<String>,

    /// Capturing device model (EXIF `Model`).
    pub device_model: Option<String>,

    /// Software that produced or processed the file.
    pub software: Option<String>,

    /// Capture timestamp as found in the file, kept as the raw tag string
    /// (EXIF datetimes are not reliably ISO-8601).
    pub captured_at: Option<String>,

    /// Formatted GPS position, e.g. `"48.858370° N, 2.294480° E"`.
    pub gps: Option<String>,

    /// All remaining raw tags, untyped. `Value::Null` when none were found.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub extra: serde_json::Value,
}
