//! In-memory store used by tests and offline development
//!
//! Behaves like the hosted backend at the trait boundary: assigns ids and
//! creation timestamps, keeps creation-descending order, and reconciles
//! upserts on the `nationalId` key while preserving existing ids.

use super::StudentStore;
use async_trait::async_trait;
use chrono::Utc;
use registry_common::{AppError, Result, StudentPayload, StudentRecord};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryStore {
    // Newest creation first, matching the list contract
    records: RwLock<Vec<StudentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records (kept in the given order)
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    fn materialize(payload: StudentPayload) -> StudentRecord {
        StudentRecord {
            id: Uuid::new_v4(),
            full_name: payload.full_name,
            previous_school: payload.previous_school,
            national_id: payload.national_id,
            phone_number: payload.phone_number,
            gender: payload.gender,
            address: payload.address,
            documents: payload.documents,
            registration_date: payload.registration_date,
            recorded: payload.recorded,
            created_at: Some(Utc::now()),
        }
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn list(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<StudentRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.national_id == national_id)
            .cloned())
    }

    async fn insert(&self, payload: StudentPayload) -> Result<StudentRecord> {
        let record = Self::materialize(payload);
        self.records.write().await.insert(0, record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, payload: StudentPayload) -> Result<StudentRecord> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound { id: id.to_string() })?;

        // registration_date is absent from update payloads; the stored
        // value survives the full-payload overwrite
        let registration_date = payload.registration_date.or(slot.registration_date);
        *slot = StudentRecord {
            id: slot.id,
            created_at: slot.created_at,
            registration_date,
            full_name: payload.full_name,
            previous_school: payload.previous_school,
            national_id: payload.national_id,
            phone_number: payload.phone_number,
            gender: payload.gender,
            address: payload.address,
            documents: payload.documents,
            recorded: payload.recorded,
        };
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.records.write().await.retain(|r| r.id != id);
        Ok(())
    }

    async fn upsert(&self, payloads: Vec<StudentPayload>) -> Result<()> {
        let mut records = self.records.write().await;
        for payload in payloads {
            match records
                .iter_mut()
                .find(|r| r.national_id == payload.national_id)
            {
                Some(existing) => {
                    let id = existing.id;
                    let created_at = existing.created_at;
                    *existing = Self::materialize(payload);
                    existing.id = id;
                    existing.created_at = created_at;
                }
                None => {
                    let record = Self::materialize(payload);
                    records.insert(0, record);
                }
            }
        }
        Ok(())
    }
}
