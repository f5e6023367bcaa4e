//! Hosted data backend abstraction
//!
//! The registry delegates all persistence to a remote store reached over
//! REST. [`StudentStore`] is the seam: the workflow only ever sees this
//! trait, so tests and offline development run against [`MemoryStore`]
//! while production uses [`RestStore`].
//!
//! Contract notes (mirroring the hosted backend):
//! - `list` returns records in creation-descending order
//! - `insert` assigns `id` and `created_at` and echoes the stored record
//! - `upsert` reconciles on the `nationalId` natural key, last write wins
//! - every failure carries the store's own message; there is no retry layer

mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use async_trait::async_trait;
use registry_common::{Result, StudentPayload, StudentRecord};
use uuid::Uuid;

/// Remote student-record store
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Fetch every record, newest creation first
    async fn list(&self) -> Result<Vec<StudentRecord>>;

    /// Look up a single record by its national id
    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<StudentRecord>>;

    /// Insert a new record; the store assigns `id` and `created_at`
    async fn insert(&self, payload: StudentPayload) -> Result<StudentRecord>;

    /// Full-payload update of an existing record
    async fn update(&self, id: Uuid, payload: StudentPayload) -> Result<StudentRecord>;

    /// Delete a record by id
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Insert-or-overwrite a batch, keyed by `nationalId`
    async fn upsert(&self, payloads: Vec<StudentPayload>) -> Result<()>;
}
