//! Field validation for student registration
//!
//! Pure rule set over a [`StudentDraft`]. All rules are evaluated on every
//! call (no short-circuiting) so the form can surface every problem at
//! once. Field keys match the wire names the form binds to.

use crate::models::StudentDraft;
use regex_lite::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Exactly 14 decimal digits, no separators
static NATIONAL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{14}$").expect("national id pattern"));

/// Local mobile pattern: 01 + one of {0,1,2,5} + 8 digits
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^01[0125]\d{8}$").expect("phone pattern"));

/// Wire field names used as error keys
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const PREVIOUS_SCHOOL: &str = "previousSchool";
    pub const NATIONAL_ID: &str = "nationalId";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const GENDER: &str = "gender";
    pub const ADDRESS: &str = "address";
}

/// Outcome of validating a draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Field name to message, one entry per failed rule
    pub errors: BTreeMap<&'static str, String>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The gender-missing error on its own, for callers that re-check the
/// selection after validation has already passed
pub fn gender_missing() -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();
    errors.insert(fields::GENDER, "Gender is required".to_string());
    errors
}

/// Validate a registration candidate. Pure; no side effects.
pub fn validate_student(draft: &StudentDraft) -> ValidationOutcome {
    let mut errors = BTreeMap::new();

    if draft.full_name.trim().is_empty() {
        errors.insert(fields::FULL_NAME, "Full name is required".to_string());
    }
    if draft.previous_school.trim().is_empty() {
        errors.insert(
            fields::PREVIOUS_SCHOOL,
            "Previous school is required".to_string(),
        );
    }
    if !NATIONAL_ID_RE.is_match(&draft.national_id) {
        errors.insert(
            fields::NATIONAL_ID,
            "National id must be exactly 14 digits".to_string(),
        );
    }
    if !PHONE_RE.is_match(&draft.phone_number) {
        errors.insert(
            fields::PHONE_NUMBER,
            "Invalid phone number (example: 01012345678)".to_string(),
        );
    }
    if draft.gender.is_none() {
        errors.insert(fields::GENDER, "Gender is required".to_string());
    }
    if draft.address.trim().is_empty() {
        errors.insert(fields::ADDRESS, "Address is required".to_string());
    }

    ValidationOutcome { errors }
}
