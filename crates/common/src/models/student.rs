//! Student record entity and its write-side shapes

use super::documents::{check_completeness, DocumentMap};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Student gender, wire form `"male"` / `"female"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Display label for lists and reports
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Who entered a record
///
/// A single shared enumeration: the form's options and the list filter
/// both read from here, and absent values display as [`UNSPECIFIED`].
pub mod recorded {
    /// Staff roles offered by the registration form
    pub const OPTIONS: &[&str] = &["Registration office", "Student affairs", "Deputy principal"];

    /// Display label for records with no attribution
    pub const UNSPECIFIED: &str = "Unspecified";
}

/// A registered student as persisted by the hosted data backend
///
/// `id` and `created_at` are store-assigned and immutable;
/// `registration_date` is set exactly once at creation and excluded from
/// updates. `registration_date` and `recorded` may be absent on legacy
/// rows that predate those columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: Uuid,
    pub full_name: String,
    pub previous_school: String,
    pub national_id: String,
    pub phone_number: String,
    pub gender: Gender,
    pub address: String,
    #[serde(default)]
    pub documents: DocumentMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded: Option<String>,
    #[serde(
        rename = "created_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl StudentRecord {
    /// Whether the record was registered on the given UTC calendar day
    pub fn registered_on(&self, day: NaiveDate) -> bool {
        self.registration_date
            .map(|ts| ts.date_naive() == day)
            .unwrap_or(false)
    }

    /// Attribution label, falling back to "Unspecified" on legacy rows
    pub fn recorded_label(&self) -> &str {
        self.recorded.as_deref().unwrap_or(recorded::UNSPECIFIED)
    }

    /// Whether every required document has been received
    pub fn documents_complete(&self) -> bool {
        check_completeness(&self.documents).is_complete
    }
}

/// Form candidate, prior to validation
///
/// `gender` is optional here because the form may not have a selection
/// yet; validation rejects drafts without one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub previous_school: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub documents: DocumentMap,
    #[serde(default)]
    pub recorded: Option<String>,
}

impl StudentDraft {
    /// Convert a validated draft into a write payload.
    ///
    /// Returns `None` when no gender is selected; callers run validation
    /// first, which reports that case as a field error.
    pub fn into_payload(
        self,
        registration_date: Option<DateTime<Utc>>,
    ) -> Option<StudentPayload> {
        let gender = self.gender?;
        Some(StudentPayload {
            full_name: self.full_name,
            previous_school: self.previous_school,
            national_id: self.national_id,
            phone_number: self.phone_number,
            gender,
            address: self.address,
            documents: self.documents,
            recorded: self.recorded,
            registration_date,
        })
    }
}

/// Validated write payload handed to the store
///
/// Carries `registration_date` only on the create and import paths; update
/// payloads leave it `None` so the original timestamp is never overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub full_name: String,
    pub previous_school: String,
    pub national_id: String,
    pub phone_number: String,
    pub gender: Gender,
    pub address: String,
    #[serde(default)]
    pub documents: DocumentMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateTime<Utc>>,
}
