//! End-to-end workflow tests against the in-memory store

use async_trait::async_trait;
use registry_client::{MemoryStore, Registry, StudentStore, SubmitOutcome};
use registry_common::{
    initialize_documents, AppError, DocumentMap, Gender, Result, StudentDraft, StudentPayload,
    StudentRecord, DOCUMENT_CATALOG,
};
use std::sync::Arc;
use uuid::Uuid;

fn complete_documents() -> DocumentMap {
    let mut docs = initialize_documents();
    for entry in DOCUMENT_CATALOG {
        docs.get_mut(entry.id).unwrap().received = true;
    }
    docs
}

fn draft(national_id: &str, name: &str) -> StudentDraft {
    StudentDraft {
        full_name: name.into(),
        previous_school: "El Nasr Preparatory".into(),
        national_id: national_id.into(),
        phone_number: "01012345678".into(),
        gender: Some(Gender::Male),
        address: "12 Corniche St".into(),
        documents: complete_documents(),
        recorded: Some("Registration office".into()),
    }
}

#[tokio::test]
async fn create_prepends_and_assigns_registration_date() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = Registry::new(store);

    let first = registry
        .submit(draft("11111111111111", "Ahmed Ali"), None)
        .await
        .unwrap();
    assert!(matches!(first, SubmitOutcome::Created(_)));
    assert!(first.record().registration_date.is_some());

    registry
        .submit(draft("22222222222222", "Mona Hassan"), None)
        .await
        .unwrap();

    let students = registry.students();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].full_name, "Mona Hassan");
    assert_eq!(students[1].full_name, "Ahmed Ali");
}

#[tokio::test]
async fn invalid_draft_is_rejected_before_any_store_call() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = Registry::new(Arc::clone(&store) as Arc<dyn StudentStore>);

    let mut bad = draft("123", "Ahmed Ali");
    bad.phone_number = "01312345678".into();

    let err = registry.submit(bad, None).await.unwrap_err();
    match err {
        AppError::Validation { errors } => {
            assert!(errors.contains_key("nationalId"));
            assert!(errors.contains_key("phoneNumber"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(store.list().await.unwrap().is_empty());
    assert!(registry.students().is_empty());
}

#[tokio::test]
async fn incomplete_documents_block_submission() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = Registry::new(Arc::clone(&store) as Arc<dyn StudentStore>);

    let mut candidate = draft("11111111111111", "Ahmed Ali");
    candidate
        .documents
        .get_mut("healthCertificate")
        .unwrap()
        .received = false;

    let err = registry.submit(candidate, None).await.unwrap_err();
    match err {
        AppError::DocumentsIncomplete { missing } => {
            assert_eq!(missing, vec!["Health certificate".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_national_id_blocks_create() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = Registry::new(Arc::clone(&store) as Arc<dyn StudentStore>);

    registry
        .submit(draft("11111111111111", "Ahmed Ali"), None)
        .await
        .unwrap();

    let err = registry
        .submit(draft("11111111111111", "Someone Else"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateNationalId { .. }));

    // No insert was issued for the second attempt
    assert_eq!(store.list().await.unwrap().len(), 1);
    assert_eq!(registry.students().len(), 1);
    assert_eq!(registry.students()[0].full_name, "Ahmed Ali");
}

#[tokio::test]
async fn update_replaces_in_place_and_keeps_registration_date() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = Registry::new(store);

    let created = registry
        .submit(draft("11111111111111", "Ahmed Ali"), None)
        .await
        .unwrap();
    let id = created.record().id;
    let original_date = created.record().registration_date;

    registry
        .submit(draft("22222222222222", "Mona Hassan"), None)
        .await
        .unwrap();

    let mut edited = draft("11111111111111", "Ahmed Ali Mahmoud");
    edited.address = "99 New Rd".into();
    let updated = registry.submit(edited, Some(id)).await.unwrap();
    assert!(matches!(updated, SubmitOutcome::Updated(_)));

    // Replaced in place: same position, same id, same registration date
    let students = registry.students();
    assert_eq!(students.len(), 2);
    assert_eq!(students[1].id, id);
    assert_eq!(students[1].full_name, "Ahmed Ali Mahmoud");
    assert_eq!(students[1].address, "99 New Rd");
    assert_eq!(students[1].registration_date, original_date);
}

#[tokio::test]
async fn delete_removes_record_after_confirmation() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = Registry::new(Arc::clone(&store) as Arc<dyn StudentStore>);

    let created = registry
        .submit(draft("11111111111111", "Ahmed Ali"), None)
        .await
        .unwrap();

    registry.delete(created.record().id).await.unwrap();
    assert!(registry.students().is_empty());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn import_backfills_legacy_phone_and_refreshes() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = Registry::new(store);

    let raw = r#"[{
        "fullName": "Ahmed Ali",
        "previousSchool": "El Nasr Preparatory",
        "nationalId": "11111111111111",
        "phone": "0100000000",
        "gender": "male",
        "address": "12 Corniche St"
    }]"#;

    let count = registry.import(raw).await.unwrap();
    assert_eq!(count, 1);

    let students = registry.students();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].phone_number, "0100000000");
    assert!(students[0].registration_date.is_some());
}

#[tokio::test]
async fn import_upsert_overwrites_existing_national_id() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = Registry::new(store);

    let created = registry
        .submit(draft("11111111111111", "Ahmed Ali"), None)
        .await
        .unwrap();
    let original_id = created.record().id;

    let raw = r#"[{
        "fullName": "Ahmed Ali (corrected)",
        "previousSchool": "El Nasr Preparatory",
        "nationalId": "11111111111111",
        "phoneNumber": "01012345678",
        "gender": "male",
        "address": "12 Corniche St"
    }]"#;

    registry.import(raw).await.unwrap();

    let students = registry.students();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, original_id);
    assert_eq!(students[0].full_name, "Ahmed Ali (corrected)");
}

#[tokio::test]
async fn malformed_import_applies_nothing() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = Registry::new(Arc::clone(&store) as Arc<dyn StudentStore>);

    let err = registry.import(r#"{"not": "an array"}"#).await.unwrap_err();
    assert!(matches!(err, AppError::Format { .. }));

    // One bad entry rejects the whole file
    let err = registry
        .import(r#"[{"fullName": "Only A Name"}]"#)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Format { .. }));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn export_then_import_round_trips() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = Registry::new(store);

    registry
        .submit(draft("11111111111111", "Ahmed Ali"), None)
        .await
        .unwrap();
    registry
        .submit(draft("22222222222222", "Mona Hassan"), None)
        .await
        .unwrap();

    let document = registry.export_document().unwrap();

    let destination = Arc::new(MemoryStore::new());
    let mut restored = Registry::new(destination);
    let count = restored.import(&document).await.unwrap();
    assert_eq!(count, 2);

    let originals = registry.students();
    for original in originals {
        let twin = restored
            .students()
            .iter()
            .find(|s| s.national_id == original.national_id)
            .expect("record survived the round trip");
        assert_eq!(twin.full_name, original.full_name);
        assert_eq!(twin.phone_number, original.phone_number);
        assert_eq!(twin.documents, original.documents);
        assert_eq!(twin.registration_date, original.registration_date);
        // Ids are re-assigned by the destination store
        assert_ne!(twin.id, original.id);
    }
}

#[tokio::test]
async fn stats_count_document_completeness() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = Registry::new(store);

    registry
        .submit(draft("11111111111111", "Ahmed Ali"), None)
        .await
        .unwrap();
    registry
        .submit(draft("22222222222222", "Mona Hassan"), None)
        .await
        .unwrap();

    let stats = registry.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.registered_today, 2);
    assert_eq!(stats.documents_complete, 2);
    assert_eq!(stats.documents_incomplete, 0);
}

/// Store double whose mutations always fail, for post-confirmation checks
struct FailingStore;

#[async_trait]
impl StudentStore for FailingStore {
    async fn list(&self) -> Result<Vec<StudentRecord>> {
        Ok(Vec::new())
    }
    async fn find_by_national_id(&self, _: &str) -> Result<Option<StudentRecord>> {
        Ok(None)
    }
    async fn insert(&self, _: StudentPayload) -> Result<StudentRecord> {
        Err(AppError::Store {
            message: "insert rejected".into(),
        })
    }
    async fn update(&self, _: Uuid, _: StudentPayload) -> Result<StudentRecord> {
        Err(AppError::Store {
            message: "update rejected".into(),
        })
    }
    async fn delete(&self, _: Uuid) -> Result<()> {
        Err(AppError::Store {
            message: "delete rejected".into(),
        })
    }
    async fn upsert(&self, _: Vec<StudentPayload>) -> Result<()> {
        Err(AppError::Store {
            message: "upsert rejected".into(),
        })
    }
}

#[tokio::test]
async fn store_failure_leaves_memory_unchanged() {
    let mut registry = Registry::new(Arc::new(FailingStore));

    let err = registry
        .submit(draft("11111111111111", "Ahmed Ali"), None)
        .await
        .unwrap_err();
    match err {
        AppError::Store { message } => assert_eq!(message, "insert rejected"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(registry.students().is_empty());

    let err = registry.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::Store { .. }));
}
