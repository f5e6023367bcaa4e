//! Error types for the student registry
//!
//! Provides a single error enum for all failure modes:
//! - Submission blockers (validation, incomplete documents, duplicate ids)
//! - Hosted data backend failures (surfaced verbatim)
//! - Import file format errors
//!
//! Every error converts to a user-facing [`Notification`], so nothing
//! propagates past an operation boundary without a visible rendering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Submission blockers
    #[error("Validation failed for {} field(s)", .errors.len())]
    Validation { errors: BTreeMap<&'static str, String> },

    #[error("Missing required documents: {}", .missing.join(", "))]
    DocumentsIncomplete { missing: Vec<String> },

    #[error("A student with national id {national_id} is already registered")]
    DuplicateNationalId { national_id: String },

    // Hosted data backend
    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Record not found: {id}")]
    NotFound { id: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    // Import/export
    #[error("Invalid import file: {message}")]
    Format { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    // Internal
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Recoverable input problem, the user can correct and resubmit
    Warning,
    /// Operation failed, no state was changed
    Error,
}

/// User-facing rendering of an error
///
/// The registry has no silent failures: every [`AppError`] maps to one of
/// these at the operation boundary and is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl AppError {
    /// True when the user can fix the input and retry without any
    /// state having changed
    pub fn is_submission_blocker(&self) -> bool {
        matches!(
            self,
            AppError::Validation { .. }
                | AppError::DocumentsIncomplete { .. }
                | AppError::DuplicateNationalId { .. }
        )
    }

    /// Convert to the user-facing notification
    pub fn notification(&self) -> Notification {
        let (severity, title) = match self {
            AppError::Validation { .. } => (Severity::Warning, "Invalid form data"),
            AppError::DocumentsIncomplete { .. } => (Severity::Warning, "Missing documents"),
            AppError::DuplicateNationalId { .. } => (Severity::Error, "Registration failed"),
            AppError::Store { .. } | AppError::NotFound { .. } | AppError::Transport(_) => {
                (Severity::Error, "Store operation failed")
            }
            AppError::Format { .. } => (Severity::Error, "Import failed"),
            AppError::Serialization(_) | AppError::Io(_) => (Severity::Error, "File error"),
            AppError::Configuration { .. } => (Severity::Error, "Configuration error"),
        };

        Notification {
            severity,
            title: title.to_string(),
            message: self.to_string(),
        }
    }
}
