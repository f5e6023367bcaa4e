//! JSON import/export for the student collection
//!
//! Export is a pretty-printed UTF-8 JSON array suitable for backup files.
//! Import accepts the same shape plus two legacy quirks: a `phone` field
//! that predates `phoneNumber`, and rows without `registrationDate`. Each
//! imported element is normalized (store-assigned `id`/`created_at`
//! stripped, legacy fields backfilled) and then strictly deserialized, so
//! a malformed file is rejected before any store call.

use chrono::{DateTime, NaiveDate, Utc};
use registry_common::{AppError, Result, StudentPayload, StudentRecord};
use serde_json::Value;
use std::path::Path;

/// Serialize a record collection as pretty-printed JSON
pub fn export_json(students: &[StudentRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(students)?)
}

/// Backup filename: `<prefix>_<ISO-date>.json`
pub fn export_filename(prefix: &str, day: NaiveDate) -> String {
    format!("{}_{}.json", prefix, day.format("%Y-%m-%d"))
}

/// Write an export document to disk
pub async fn write_export(path: &Path, students: &[StudentRecord]) -> Result<()> {
    let document = export_json(students)?;
    tokio::fs::write(path, document).await?;
    Ok(())
}

/// Read and normalize an import file
pub async fn read_import(path: &Path, now: DateTime<Utc>) -> Result<Vec<StudentPayload>> {
    let raw = tokio::fs::read_to_string(path).await?;
    parse_import(&raw, now)
}

/// Parse a user-supplied import document into upsert payloads.
///
/// The top-level value must be a JSON array; anything else is a format
/// error and nothing is applied.
pub fn parse_import(raw: &str, now: DateTime<Utc>) -> Result<Vec<StudentPayload>> {
    let value: Value = serde_json::from_str(raw).map_err(|e| AppError::Format {
        message: format!("not valid JSON: {e}"),
    })?;

    let Value::Array(entries) = value else {
        return Err(AppError::Format {
            message: "top-level value must be a JSON array of students".to_string(),
        });
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| normalize_entry(entry, index, now))
        .collect()
}

fn normalize_entry(mut entry: Value, index: usize, now: DateTime<Utc>) -> Result<StudentPayload> {
    let object = entry.as_object_mut().ok_or_else(|| AppError::Format {
        message: format!("entry {index} is not an object"),
    })?;

    // The destination store assigns its own id and creation timestamp
    object.remove("id");
    object.remove("created_at");

    // Backfill phoneNumber from the legacy phone field
    let phone_missing = object
        .get("phoneNumber")
        .map_or(true, |v| v.is_null() || v.as_str().is_some_and(str::is_empty));
    let legacy_phone = object.remove("phone");
    if phone_missing {
        if let Some(phone) = legacy_phone.filter(|v| !v.is_null()) {
            object.insert("phoneNumber".to_string(), phone);
        }
    }

    // Rows exported before registrationDate existed get the import time
    let date_missing = object
        .get("registrationDate")
        .map_or(true, Value::is_null);
    if date_missing {
        object.insert(
            "registrationDate".to_string(),
            Value::String(now.to_rfc3339()),
        );
    }

    serde_json::from_value(entry).map_err(|e| AppError::Format {
        message: format!("entry {index}: {e}"),
    })
}
