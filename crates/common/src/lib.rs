//! Student Registry Common Library
//!
//! Shared code for the registry front end:
//! - Domain model (student records, document catalog)
//! - Field validation and document completeness checking
//! - Error types and user-facing notifications
//! - Configuration management
//! - Tracing setup

pub mod config;
pub mod errors;
pub mod models;
pub mod telemetry;
pub mod validation;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, Notification, Result, Severity};
pub use models::{
    check_completeness, initialize_documents, CompletenessReport, DocumentMap, DocumentStatus,
    Gender, StudentDraft, StudentPayload, StudentRecord, DOCUMENT_CATALOG,
};
pub use validation::{validate_student, ValidationOutcome};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
