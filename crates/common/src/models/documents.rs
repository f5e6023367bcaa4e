//! Required-document catalog and completeness checking
//!
//! The catalog is a process-wide constant: it defines which document slots
//! exist and which are mandatory. It is not derived from stored data, so a
//! record's document map is always evaluated against the same checklist in
//! the form, the list badges, and the statistics panel.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One slot in the required-document catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable identifier used as the key in a record's document map
    pub id: &'static str,
    /// Display name used in notifications and reports
    pub name: &'static str,
    /// Whether the slot is mandatory for completeness
    pub required: bool,
}

/// The fixed, ordered admission checklist
pub const DOCUMENT_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "birthCertificate",
        name: "Birth certificate (original + 3 copies)",
        required: true,
    },
    CatalogEntry {
        id: "graduationCertificate",
        name: "Preparatory school certificate (original + 3 copies)",
        required: true,
    },
    CatalogEntry {
        id: "personalPhotos",
        name: "6 recent personal photos",
        required: true,
    },
    CatalogEntry {
        id: "guardianId",
        name: "Copy of the guardian's national ID card",
        required: true,
    },
    CatalogEntry {
        id: "feeReceipt",
        name: "Tuition fee payment receipt (+ 3 copies)",
        required: true,
    },
    CatalogEntry {
        id: "unionStamp",
        name: "Teachers' syndicate stamp",
        required: true,
    },
    CatalogEntry {
        id: "developmentStamp",
        name: "Education development support stamp",
        required: true,
    },
    CatalogEntry {
        id: "applicationFile",
        name: "Application file (admission form + official stamps)",
        required: true,
    },
    CatalogEntry {
        id: "preferencesForm",
        name: "Preferences form",
        required: true,
    },
    CatalogEntry {
        id: "conductForm",
        name: "Good conduct form",
        required: true,
    },
    CatalogEntry {
        id: "healthCertificate",
        name: "Health certificate",
        required: true,
    },
];

/// Per-document state on a student record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatus {
    #[serde(default)]
    pub received: bool,
    #[serde(default)]
    pub notes: String,
}

/// Mapping from catalog id to document state
pub type DocumentMap = BTreeMap<String, DocumentStatus>;

/// Seed a document map with one unreceived entry per catalog slot.
///
/// Every record carries an entry for every slot after initialization;
/// entries are never removed, only their state mutated.
pub fn initialize_documents() -> DocumentMap {
    DOCUMENT_CATALOG
        .iter()
        .map(|entry| (entry.id.to_string(), DocumentStatus::default()))
        .collect()
}

/// Result of evaluating a document map against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub is_complete: bool,
    /// Required slots absent or not received, in catalog order
    pub missing: Vec<String>,
    /// Optional slots present but not received, in catalog order
    pub incomplete: Vec<String>,
    pub total_required: usize,
    pub completed_required: usize,
}

/// Evaluate a document map against the fixed catalog.
///
/// An empty map is a valid input and reports every required slot as
/// missing; this never panics.
pub fn check_completeness(documents: &DocumentMap) -> CompletenessReport {
    let mut missing = Vec::new();
    let mut incomplete = Vec::new();
    let mut completed_required = 0;

    for entry in DOCUMENT_CATALOG {
        let status = documents.get(entry.id);
        let received = status.map(|s| s.received).unwrap_or(false);

        if entry.required {
            if received {
                completed_required += 1;
            } else {
                missing.push(entry.name.to_string());
            }
        } else if status.is_some() && !received {
            incomplete.push(entry.name.to_string());
        }
    }

    CompletenessReport {
        is_complete: missing.is_empty(),
        missing,
        incomplete,
        total_required: DOCUMENT_CATALOG.iter().filter(|e| e.required).count(),
        completed_required,
    }
}
