/// Local document persistence, backed by redb.
///
/// Plays the role of a flat key-value store with two canonical keys:
/// the document content and its file name. Content is stored as raw
/// `&str` to avoid escaping issues with large markup buffers; a small
/// bincode metadata record carries the save timestamp.
///
/// An absent key is "no saved content", not an error; only actual store
/// failures propagate.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};

/// Flat key-value table: key → raw text value.
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Metadata table: `"document"` → bincode(`SavedDocumentMeta`).
const META_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("meta");

/// Key under which the document content is stored.
pub const CONTENT_KEY: &str = "content";

/// Key under which the document file name is stored.
pub const FILE_NAME_KEY: &str = "file_name";

const META_KEY: &str = "document";

/// Metadata persisted alongside the saved document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDocumentMeta {
    pub file_name: String,
    /// Unix timestamp of the save.
    pub saved_at_epoch_secs: i64,
}

/// A document restored from the store.
#[derive(Debug, Clone)]
pub struct SavedDocument {
    pub content: String,
    pub file_name: Option<String>,
    pub saved_at_epoch_secs: Option<i64>,
}

/// Persistence layer for the current document, backed by redb.
pub struct DocumentStore {
    db: Database,
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore").finish()
    }
}

/// Resolves the data directory for the store.
///
/// Resolution order:
/// 1. `RICH_PAD_DATA_DIR` environment variable
/// 2. `.data/` directory next to the executable
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("RICH_PAD_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let exe = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
    exe.parent().unwrap_or(Path::new(".")).join(".data")
}

impl DocumentStore {
    /// Opens or creates the store database in the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the
    /// database cannot be opened.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let db_path = data_dir.join("rich-pad-store.redb");
        let db = Database::create(&db_path)
            .with_context(|| format!("Failed to open document store: {}", db_path.display()))?;

        // Ensure tables exist
        let write_txn = db
            .begin_write()
            .context("Failed to begin initial write transaction")?;
        {
            let _ = write_txn
                .open_table(KV_TABLE)
                .context("Failed to create kv table")?;
            let _ = write_txn
                .open_table(META_TABLE)
                .context("Failed to create meta table")?;
        }
        write_txn
            .commit()
            .context("Failed to commit initial transaction")?;

        Ok(Self { db })
    }

    /// Stores a value under a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the write transaction fails.
    pub fn save_named(&self, key: &str, value: &str) -> Result<()> {
        let write_txn = self
            .db
            .begin_write()
            .context("Failed to begin write transaction")?;
        {
            let mut table = write_txn
                .open_table(KV_TABLE)
                .context("Failed to open kv table")?;
            table
                .insert(key, value)
                .with_context(|| format!("Failed to insert value for key '{key}'"))?;
        }
        write_txn.commit().context("Failed to commit write")?;
        Ok(())
    }

    /// Loads the value stored under a key, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error only if the read transaction fails; an absent
    /// key is not an error.
    pub fn load_named(&self, key: &str) -> Result<Option<String>> {
        let read_txn = self
            .db
            .begin_read()
            .context("Failed to begin read transaction")?;
        let table = read_txn
            .open_table(KV_TABLE)
            .context("Failed to open kv table")?;

        match table
            .get(key)
            .with_context(|| format!("Failed to read key '{key}'"))?
        {
            Some(guard) => Ok(Some(guard.value().to_string())),
            None => Ok(None),
        }
    }

    /// Removes a key (no-op when absent).
    ///
    /// # Errors
    ///
    /// Returns an error if the write transaction fails.
    pub fn delete_named(&self, key: &str) -> Result<()> {
        let write_txn = self
            .db
            .begin_write()
            .context("Failed to begin write transaction")?;
        {
            let mut table = write_txn
                .open_table(KV_TABLE)
                .context("Failed to open kv table")?;
            let _ = table.remove(key);
        }
        write_txn.commit().context("Failed to commit deletion")?;
        Ok(())
    }

    /// Saves the document content and file name in one transaction,
    /// along with a metadata record stamping the save time.
    ///
    /// # Errors
    ///
    /// Returns an error if the write transaction fails.
    pub fn save_document(&self, content: &str, file_name: &str) -> Result<()> {
        let meta = SavedDocumentMeta {
            file_name: file_name.to_string(),
            saved_at_epoch_secs: chrono::Utc::now().timestamp(),
        };
        let meta_bytes = bincode::serialize(&meta).context("Failed to serialize metadata")?;

        let write_txn = self
            .db
            .begin_write()
            .context("Failed to begin write transaction")?;
        {
            let mut kv = write_txn
                .open_table(KV_TABLE)
                .context("Failed to open kv table")?;
            kv.insert(CONTENT_KEY, content)
                .context("Failed to insert content")?;
            kv.insert(FILE_NAME_KEY, file_name)
                .context("Failed to insert file name")?;
        }
        {
            let mut meta_table = write_txn
                .open_table(META_TABLE)
                .context("Failed to open meta table")?;
            meta_table
                .insert(META_KEY, meta_bytes.as_slice())
                .context("Failed to insert metadata")?;
        }
        write_txn.commit().context("Failed to commit document")?;
        Ok(())
    }

    /// Loads the saved document, or `None` if nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns an error if a read transaction or deserialization fails.
    pub fn load_document(&self) -> Result<Option<SavedDocument>> {
        let Some(content) = self.load_named(CONTENT_KEY)? else {
            return Ok(None);
        };
        let file_name = self.load_named(FILE_NAME_KEY)?;
        let saved_at_epoch_secs = self.load_meta()?.map(|m| m.saved_at_epoch_secs);
        Ok(Some(SavedDocument {
            content,
            file_name,
            saved_at_epoch_secs,
        }))
    }

    /// Loads the save metadata record, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read transaction or deserialization fails.
    pub fn load_meta(&self) -> Result<Option<SavedDocumentMeta>> {
        let read_txn = self
            .db
            .begin_read()
            .context("Failed to begin read transaction")?;
        let table = read_txn
            .open_table(META_TABLE)
            .context("Failed to open meta table")?;

        match table.get(META_KEY).context("Failed to read metadata")? {
            Some(guard) => {
                let meta: SavedDocumentMeta = bincode::deserialize(guard.value())
                    .context("Failed to deserialize metadata")?;
                Ok(Some(meta))
            }
            None => Ok(None),
        }
    }

    /// Removes the saved document and its metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the write transaction fails.
    pub fn clear(&self) -> Result<()> {
        let write_txn = self
            .db
            .begin_write()
            .context("Failed to begin write transaction")?;
        {
            let mut kv = write_txn
                .open_table(KV_TABLE)
                .context("Failed to open kv table")?;
            let _ = kv.remove(CONTENT_KEY);
            let _ = kv.remove(FILE_NAME_KEY);
        }
        {
            let mut meta_table = write_txn
                .open_table(META_TABLE)
                .context("Failed to open meta table")?;
            let _ = meta_table.remove(META_KEY);
        }
        write_txn.commit().context("Failed to commit clear")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_test_store() -> (DocumentStore, TempDir) {
        let dir = TempDir::new().expect("create temp dir");
        let store = DocumentStore::open(dir.path()).expect("open store");
        (store, dir)
    }

    #[test]
    fn test_load_named_absent_key_is_none() {
        let (store, _dir) = open_test_store();
        assert!(store.load_named(CONTENT_KEY).expect("load").is_none());
        assert!(store.load_named("anything").expect("load").is_none());
    }

    #[test]
    fn test_save_and_load_named() {
        let (store, _dir) = open_test_store();
        store.save_named(CONTENT_KEY, "<p>hello</p>").expect("save");
        let loaded = store.load_named(CONTENT_KEY).expect("load").expect("some");
        assert_eq!(loaded, "<p>hello</p>");
    }

    #[test]
    fn test_save_named_overwrites() {
        let (store, _dir) = open_test_store();
        store.save_named("k", "first").expect("save");
        store.save_named("k", "second").expect("save");
        assert_eq!(store.load_named("k").expect("load").unwrap(), "second");
    }

    #[test]
    fn test_delete_named() {
        let (store, _dir) = open_test_store();
        store.save_named("k", "v").expect("save");
        store.delete_named("k").expect("delete");
        assert!(store.load_named("k").expect("load").is_none());

        // Deleting an absent key succeeds.
        store.delete_named("never-existed").expect("delete");
    }

    #[test]
    fn test_load_document_empty_store() {
        let (store, _dir) = open_test_store();
        assert!(store.load_document().expect("load").is_none());
    }

    #[test]
    fn test_save_and_load_document() {
        let (store, _dir) = open_test_store();
        store
            .save_document("<p>body</p>", "notes.txt")
            .expect("save");

        let saved = store.load_document().expect("load").expect("some");
        assert_eq!(saved.content, "<p>body</p>");
        assert_eq!(saved.file_name.as_deref(), Some("notes.txt"));
        assert!(saved.saved_at_epoch_secs.is_some());
    }

    #[test]
    fn test_meta_tracks_latest_save() {
        let (store, _dir) = open_test_store();
        store.save_document("a", "first.txt").expect("save");
        store.save_document("b", "second.txt").expect("save");

        let meta = store.load_meta().expect("load").expect("some");
        assert_eq!(meta.file_name, "second.txt");
    }

    #[test]
    fn test_clear_removes_everything() {
        let (store, _dir) = open_test_store();
        store.save_document("content", "doc.txt").expect("save");
        store.clear().expect("clear");

        assert!(store.load_document().expect("load").is_none());
        assert!(store.load_meta().expect("load").is_none());
    }

    #[test]
    fn test_content_with_special_chars() {
        let (store, _dir) = open_test_store();
        let content = "Hello 🌍\n\"quotes\" &amp; <b>tags</b>\n\ttabs";
        store.save_document(content, "special.txt").expect("save");
        let saved = store.load_document().expect("load").expect("some");
        assert_eq!(saved.content, content);
    }

    #[test]
    fn test_reopen_preserves_data() {
        let dir = TempDir::new().expect("create temp dir");
        {
            let store = DocumentStore::open(dir.path()).expect("open");
            store.save_document("persistent", "doc.txt").expect("save");
        }
        {
            let store = DocumentStore::open(dir.path()).expect("reopen");
            let saved = store.load_document().expect("load").expect("some");
            assert_eq!(saved.content, "persistent");
            assert_eq!(saved.file_name.as_deref(), Some("doc.txt"));
        }
    }

    #[test]
    fn test_resolve_data_dir_with_env_var() {
        let original = std::env::var("RICH_PAD_DATA_DIR").ok();
        std::env::set_var("RICH_PAD_DATA_DIR", "/custom/path");
        assert_eq!(resolve_data_dir(), PathBuf::from("/custom/path"));
        match original {
            Some(val) => std::env::set_var("RICH_PAD_DATA_DIR", val),
            None => std::env::remove_var("RICH_PAD_DATA_DIR"),
        }
    }
}
