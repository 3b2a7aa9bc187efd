use super::*;
use crate::notestore::tests as common_tests;
use crate::notestore::{NoteStore, Operation};
use crate::{GlobalPreference, Note, NoteID, NoteStyle};

async fn get_store() -> SQLiteStore {
    SQLiteStoreBuilder::in_memory()
        .build()
        .await
        .expect("Failed to open in-memory SQLite database")
}

#[test]
fn statements_use_numbered_placeholders() {
    for op in Operation::ALL {
        let sql = statement(op);
        assert!(!sql.trim().is_empty(), "{op} has no statement");
        assert!(!sql.contains('$'), "{op} uses PostgreSQL placeholders");
    }
}

#[tokio::test]
async fn save_retrieve() {
    common_tests::save_retrieve(get_store().await).await;
}

#[tokio::test]
async fn retrieve_ordered_by_id() {
    common_tests::retrieve_ordered_by_id(get_store().await).await;
}

#[tokio::test]
async fn save_overwrites_full_record() {
    common_tests::save_overwrites_full_record(get_store().await).await;
}

#[tokio::test]
async fn update_keeps_style() {
    common_tests::update_keeps_style(get_store().await).await;
}

#[tokio::test]
async fn update_missing_note() {
    common_tests::update_missing_note(get_store().await).await;
}

#[tokio::test]
async fn delete_note() {
    common_tests::delete_note(get_store().await).await;
}

#[tokio::test]
async fn text_is_not_interpreted() {
    common_tests::text_is_not_interpreted(get_store().await).await;
}

#[tokio::test]
async fn preferences_absent() {
    common_tests::preferences_absent(get_store().await).await;
}

#[tokio::test]
async fn preferences_last_write_wins() {
    common_tests::preferences_last_write_wins(get_store().await).await;
}

#[tokio::test]
async fn file_survives_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("stickyboard.db");
    let mut note = Note::new(NoteID::new(0));
    note.set_text("remember me");
    let preference = GlobalPreference::new(true, NoteStyle::new("#fff", "Arial", "#000"));
    {
        let store = SQLiteStoreBuilder::new(&path).build().await.unwrap();
        store.save(&note).await.unwrap();
        store.save_preferences(&preference).await.unwrap();
    }
    assert!(path.exists());
    let store = SQLiteStoreBuilder::new(&path).build().await.unwrap();
    assert_eq!(store.retrieve().await.unwrap(), vec![note]);
    assert_eq!(store.get_preferences().await.unwrap(), Some(preference));
}

#[tokio::test]
async fn unopenable_file_is_a_connection_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file.
    let res = SQLiteStoreBuilder::new(dir.path()).build().await;
    assert!(matches!(
        res,
        Err(NoteStoreError::ConnectionError(BACKEND, _))
    ));
}
