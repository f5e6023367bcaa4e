//! Student Registry Client
//!
//! Front-end orchestration for the student registry:
//! - Store abstraction over the hosted data backend (REST + in-memory)
//! - Registration workflow gating on validation and document completeness
//! - In-memory list filtering and derived counts
//! - JSON import/export with legacy-field normalization
//! - Printable report rendering

pub mod codec;
pub mod query;
pub mod report;
pub mod store;
pub mod workflow;

// Re-export commonly used types
pub use query::{filter_students, registered_today, FilterCriteria, GenderFilter};
pub use report::render_report;
pub use store::{MemoryStore, RestStore, StudentStore};
pub use workflow::{Registry, RegistryStats, SubmitOutcome};
