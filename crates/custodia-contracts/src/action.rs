//! Ledger action tags.
//!
//! The persisted form of an action is a plain string (`CASE_CREATED`,
//! `EVIDENCE_UPLOADED`, `COC_VERIFIED`, …) so that collaborators can
//! introduce new tags without a schema change and without perturbing any
//! hash computed over historical entries. [`ActionTag`] is the closed enum
//! view used by producers and display code; unknown strings round-trip
//! through [`ActionTag::Other`].

use std::fmt;

use crate::custody::CustodyEventType;

/// A security-relevant action recorded in the audit ledger.
///
/// The enum is for compile-time exhaustiveness in Rust code; what gets
/// hashed and stored is always the string produced by `Display` /
/// [`ActionTag::as_tag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionTag {
    /// A case was created.
    CaseCreated,
    /// An evidence file was uploaded and its record persisted.
    EvidenceUploaded,
    /// An evidence file or its metadata was viewed.
    EvidenceAccessed,
    /// The case overview text was edited.
    OverviewModified,
    /// The case findings text was edited.
    FindingsModified,
    /// A chain-of-custody event, tagged `COC_<TYPE>`.
    Custody(CustodyEventType),
    /// A tag this build does not know about. Preserved verbatim.
    Other(String),
}

impl ActionTag {
    /// The persisted string form of this tag.
    pub fn as_tag(&self) -> String {
        match self {
            ActionTag::CaseCreated => "CASE_CREATED".to_string(),
            ActionTag::EvidenceUploaded => "EVIDENCE_UPLOADED".to_string(),
            ActionTag::EvidenceAccessed => "EVIDENCE_ACCESSED".to_string(),
            ActionTag::OverviewModified => "OVERVIEW_MODIFIED".to_string(),
            ActionTag::FindingsModified => "FINDINGS_MODIFIED".to_string(),
            ActionTag::Custody(event_type) => format!("COC_{}", event_type.tag()),
            ActionTag::Other(tag) => tag.clone(),
        }
    }

    /// Parse a persisted tag string back into the enum.
    ///
    /// Lossless: any string not matching a known tag becomes
    /// [`ActionTag::Other`], so `parse(s).as_tag() == s` for all inputs.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "CASE_CREATED" => ActionTag::CaseCreated,
            "EVIDENCE_UPLOADED" => ActionTag::EvidenceUploaded,
            "EVIDENCE_ACCESSED" => ActionTag::EvidenceAccessed,
            "OVERVIEW_MODIFIED" => ActionTag::OverviewModified,
            "FINDINGS_MODIFIED" => ActionTag::FindingsModified,
            other => match other
                .strip_prefix("COC_")
                .and_then(CustodyEventType::from_tag)
            {
                Some(event_type) => ActionTag::Custody(event_type),
                None => ActionTag::Other(other.to_string()),
            },
        }
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_tag())
    }
}

/// De-slug an action tag for human display: underscores become spaces and
/// each word is title-cased. `"EVIDENCE_UPLOADED"` → `"Evidence Uploaded"`.
///
/// Display-layer convenience only; the persisted and hashed form is always
/// the raw tag.
pub fn display_label(tag: &str) -> String {
    tag.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
