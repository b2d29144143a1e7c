//! Save/restore cycles against a real store database.

use rich_pad_config::store::{CONTENT_KEY, FILE_NAME_KEY};
use rich_pad_config::DocumentStore;
use tempfile::TempDir;

#[test]
fn fresh_store_reports_no_saved_content() {
    let dir = TempDir::new().expect("create temp dir");
    let store = DocumentStore::open(dir.path()).expect("open");

    // Absent keys are "no saved content", not errors.
    assert!(store.load_named(CONTENT_KEY).expect("load").is_none());
    assert!(store.load_named(FILE_NAME_KEY).expect("load").is_none());
    assert!(store.load_document().expect("load").is_none());
}

#[test]
fn save_then_restore_across_reopen() {
    let dir = TempDir::new().expect("create temp dir");

    {
        let store = DocumentStore::open(dir.path()).expect("open");
        store
            .save_document("<p>draft <b>two</b></p>", "report.html")
            .expect("save");
    }

    // A later session sees the same document.
    let store = DocumentStore::open(dir.path()).expect("reopen");
    let saved = store.load_document().expect("load").expect("some");
    assert_eq!(saved.content, "<p>draft <b>two</b></p>");
    assert_eq!(saved.file_name.as_deref(), Some("report.html"));

    let meta = store.load_meta().expect("meta").expect("some");
    assert_eq!(meta.file_name, "report.html");
    assert!(meta.saved_at_epoch_secs > 0);
}

#[test]
fn flat_kv_interface_matches_document_interface() {
    let dir = TempDir::new().expect("create temp dir");
    let store = DocumentStore::open(dir.path()).expect("open");

    store.save_document("content here", "name.txt").expect("save");

    // The document convenience methods write through the same flat keys.
    assert_eq!(
        store.load_named(CONTENT_KEY).expect("load").unwrap(),
        "content here"
    );
    assert_eq!(
        store.load_named(FILE_NAME_KEY).expect("load").unwrap(),
        "name.txt"
    );
}

#[test]
fn clear_then_load_is_no_saved_content_again() {
    let dir = TempDir::new().expect("create temp dir");
    let store = DocumentStore::open(dir.path()).expect("open");

    store.save_document("temp", "t.txt").expect("save");
    store.clear().expect("clear");
    assert!(store.load_document().expect("load").is_none());

    // The store remains usable after a clear.
    store.save_document("again", "t.txt").expect("save");
    assert!(store.load_document().expect("load").is_some());
}
