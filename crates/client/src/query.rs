//! In-memory list filtering and derived counts
//!
//! The filter is stable (input order preserved, never re-sorted) and all
//! active criteria combine with logical AND. Text search is
//! case-insensitive over name, school, and address, and an exact substring
//! match over the numeric phone and national-id fields.

use chrono::NaiveDate;
use registry_common::{Gender, StudentRecord};

/// Gender criterion with an explicit match-all sentinel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenderFilter {
    #[default]
    All,
    Only(Gender),
}

/// Transient, UI-scoped filter state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free-text term; empty means match-all
    pub search_term: String,
    pub gender: GenderFilter,
    /// Exact match on the attribution label; `None` means match-all
    pub recorded: Option<String>,
}

/// Whether one record satisfies every active criterion
pub fn matches(student: &StudentRecord, criteria: &FilterCriteria) -> bool {
    let term = criteria.search_term.as_str();
    let search_match = term.is_empty() || {
        let needle = term.to_lowercase();
        student.full_name.to_lowercase().contains(&needle)
            || student.previous_school.to_lowercase().contains(&needle)
            || student.address.to_lowercase().contains(&needle)
            || student.phone_number.contains(term)
            || student.national_id.contains(term)
    };

    let gender_match = match criteria.gender {
        GenderFilter::All => true,
        GenderFilter::Only(gender) => student.gender == gender,
    };

    let recorded_match = criteria
        .recorded
        .as_deref()
        .map(|wanted| student.recorded_label() == wanted)
        .unwrap_or(true);

    search_match && gender_match && recorded_match
}

/// Stable AND-composed filter over the collection
pub fn filter_students(students: &[StudentRecord], criteria: &FilterCriteria) -> Vec<StudentRecord> {
    students
        .iter()
        .filter(|s| matches(s, criteria))
        .cloned()
        .collect()
}

/// Count of records registered on the given UTC calendar day, computed
/// over the unfiltered collection
pub fn registered_today(students: &[StudentRecord], today: NaiveDate) -> usize {
    students.iter().filter(|s| s.registered_on(today)).count()
}

/// Number of active criteria, for the filter badge
pub fn active_filter_count(criteria: &FilterCriteria) -> usize {
    let mut count = 0;
    if !criteria.search_term.is_empty() {
        count += 1;
    }
    if criteria.gender != GenderFilter::All {
        count += 1;
    }
    if criteria.recorded.is_some() {
        count += 1;
    }
    count
}
