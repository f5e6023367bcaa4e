//! Domain model for the student registry
//!
//! Records mirror the wire shape of the hosted data backend: camelCase
//! field names as the original web client wrote them, plus the snake_case
//! `created_at` column the store assigns itself.

pub mod documents;
pub mod student;

pub use documents::{
    check_completeness, initialize_documents, CatalogEntry, CompletenessReport, DocumentMap,
    DocumentStatus, DOCUMENT_CATALOG,
};
pub use student::{recorded, Gender, StudentDraft, StudentPayload, StudentRecord};
