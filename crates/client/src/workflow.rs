//! Registration workflow
//!
//! [`Registry`] owns the in-memory mirror of the store and is the only
//! place that mutates it. Every submit gates on validation and document
//! completeness before any store call; memory changes only after the
//! store confirms, so a failed call never leaves phantom state behind.
//!
//! Known gap, kept on purpose: the create-path duplicate check is a read
//! followed by a separate insert. Two near-simultaneous creates with the
//! same national id can both pass the check. The store contract offers no
//! conditional insert; a store-side unique constraint is the real fix.

use crate::codec;
use crate::store::StudentStore;
use chrono::Utc;
use registry_common::validation::{self, validate_student};
use registry_common::{check_completeness, AppError, Result, StudentDraft, StudentRecord};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Successful submit result
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Created(StudentRecord),
    Updated(StudentRecord),
}

impl SubmitOutcome {
    pub fn record(&self) -> &StudentRecord {
        match self {
            SubmitOutcome::Created(record) | SubmitOutcome::Updated(record) => record,
        }
    }
}

/// Aggregates for the statistics panel, computed over the unfiltered
/// collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total: usize,
    pub registered_today: usize,
    pub documents_complete: usize,
    pub documents_incomplete: usize,
}

/// Orchestrator for create/update/delete/import against the hosted store
pub struct Registry {
    store: Arc<dyn StudentStore>,
    students: Vec<StudentRecord>,
}

impl Registry {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self {
            store,
            students: Vec::new(),
        }
    }

    /// Read-only view of the mirrored collection, newest creation first
    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    /// Replace the mirror with a fresh fetch from the store
    pub async fn refresh(&mut self) -> Result<usize> {
        self.students = self.store.list().await?;
        info!(count = self.students.len(), "refreshed student collection");
        Ok(self.students.len())
    }

    /// Submit a registration form.
    ///
    /// `editing` selects the update path for an existing record; otherwise
    /// a new record is created. Validation and document completeness run
    /// first and abort without any network call.
    pub async fn submit(
        &mut self,
        draft: StudentDraft,
        editing: Option<Uuid>,
    ) -> Result<SubmitOutcome> {
        let outcome = validate_student(&draft);
        if !outcome.is_valid() {
            warn!(fields = outcome.errors.len(), "submission failed validation");
            return Err(AppError::Validation {
                errors: outcome.errors,
            });
        }

        let completeness = check_completeness(&draft.documents);
        if !completeness.is_complete {
            warn!(
                missing = completeness.missing.len(),
                "submission blocked on incomplete documents"
            );
            return Err(AppError::DocumentsIncomplete {
                missing: completeness.missing,
            });
        }

        match editing {
            Some(id) => self.update_existing(draft, id).await,
            None => self.create_new(draft).await,
        }
    }

    async fn create_new(&mut self, draft: StudentDraft) -> Result<SubmitOutcome> {
        let national_id = draft.national_id.clone();
        if self.store.find_by_national_id(&national_id).await?.is_some() {
            warn!(%national_id, "duplicate national id on create");
            return Err(AppError::DuplicateNationalId { national_id });
        }

        // Validation guarantees a gender selection; this keeps the same
        // user-facing failure if a caller skips it
        let payload = draft
            .into_payload(Some(Utc::now()))
            .ok_or_else(|| AppError::Validation {
                errors: validation::gender_missing(),
            })?;

        let created = self.store.insert(payload).await?;
        info!(id = %created.id, "registered student");
        self.students.insert(0, created.clone());
        Ok(SubmitOutcome::Created(created))
    }

    async fn update_existing(&mut self, draft: StudentDraft, id: Uuid) -> Result<SubmitOutcome> {
        // registration_date stays None: it is set once at creation and
        // excluded from every update payload
        let payload = draft
            .into_payload(None)
            .ok_or_else(|| AppError::Validation {
                errors: validation::gender_missing(),
            })?;

        let updated = self.store.update(id, payload).await?;
        info!(%id, "updated student");
        if let Some(slot) = self.students.iter_mut().find(|s| s.id == id) {
            *slot = updated.clone();
        }
        Ok(SubmitOutcome::Updated(updated))
    }

    /// Delete a record; the mirror is touched only after store confirmation
    pub async fn delete(&mut self, id: Uuid) -> Result<()> {
        self.store.delete(id).await?;
        self.students.retain(|s| s.id != id);
        info!(%id, "deleted student");
        Ok(())
    }

    /// Import a JSON document: normalize, upsert on national id, then
    /// refresh the mirror wholesale. Returns the number of records applied.
    pub async fn import(&mut self, raw: &str) -> Result<usize> {
        let payloads = codec::parse_import(raw, Utc::now())?;
        let count = payloads.len();
        self.store.upsert(payloads).await?;
        info!(count, "imported student records");
        self.refresh().await?;
        Ok(count)
    }

    /// Export the mirrored collection as a pretty-printed JSON document
    pub fn export_document(&self) -> Result<String> {
        codec::export_json(&self.students)
    }

    /// Statistics over the unfiltered collection
    pub fn stats(&self) -> RegistryStats {
        let today = Utc::now().date_naive();
        let complete = self
            .students
            .iter()
            .filter(|s| s.documents_complete())
            .count();

        RegistryStats {
            total: self.students.len(),
            registered_today: crate::query::registered_today(&self.students, today),
            documents_complete: complete,
            documents_incomplete: self.students.len() - complete,
        }
    }
}
