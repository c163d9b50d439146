//! JSON file store.
//!
//! The whole document lives in a single pretty-printed file. Reads fail soft to an empty
//! document; writes go through a `.tmp` sibling and a rename so a crash mid-write never
//! leaves a truncated file behind.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::errors::AppError;
use crate::models::Document;

/// File name of the persisted document inside the data directory.
pub const DATA_FILE_NAME: &str = "media-data.json";

/// Owner of the on-disk document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty document if none exists yet. Never touches an existing file.
    ///
    /// Returns `true` when a fresh document was created.
    pub async fn initialize(&self) -> Result<bool, AppError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(false);
        }

        self.write_atomic(&Document::default()).await?;
        tracing::info!("Created empty media document at {:?}", self.path);
        Ok(true)
    }

    /// Read the full document, or an empty one if it cannot be read or parsed.
    pub async fn load(&self) -> Document {
        match self.try_load().await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::error!("Error reading data from {:?}: {}", self.path, e);
                Document::default()
            }
        }
    }

    /// Overwrite the full document. Returns whether the write succeeded.
    pub async fn save(&self, doc: &Document) -> bool {
        match self.write_atomic(doc).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error writing data to {:?}: {}", self.path, e);
                false
            }
        }
    }

    async fn try_load(&self) -> Result<Document, AppError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let doc = serde_json::from_str(&raw)?;
        Ok(doc)
    }

    async fn write_atomic(&self, doc: &Document) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| AppError::Internal(format!("Failed to serialize document: {}", e)))?;

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = tokio::fs::File::create(&tmp).await?;
            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?;
        }
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonStore {
        JsonStore::new(dir.path().join(DATA_FILE_NAME))
    }

    fn sample_document() -> Document {
        let record = |v: serde_json::Value| Record::from_fields(v.as_object().cloned().unwrap());
        Document {
            movies: vec![record(json!({
                "id": "1",
                "dateAdded": "2026-01-01T00:00:00.000Z",
                "title": "Heat",
                "rating": 5
            }))],
            books: vec![record(json!({"id": "2", "title": "Dune", "author": "Herbert"}))],
            shows: vec![],
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let doc = sample_document();

        assert!(store.save(&doc).await);
        assert_eq!(store.load().await, doc);
    }

    #[tokio::test]
    async fn test_saved_file_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.save(&Document::default()).await);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\n  \"movies\": []"));
        assert!(!dir.path().join("media-data.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_initialize_creates_empty_document() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("nested").join(DATA_FILE_NAME));

        assert!(store.initialize().await.unwrap());

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw, json!({"movies": [], "books": [], "shows": []}));
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let doc = sample_document();
        assert!(store.save(&doc).await);

        assert!(!store.initialize().await.unwrap());
        assert!(!store.initialize().await.unwrap());
        assert_eq!(store.load().await, doc);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load().await, Document::default());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();

        assert_eq!(store.load().await, Document::default());
    }

    #[tokio::test]
    async fn test_save_failure_reports_false() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "plain file").unwrap();

        let store = JsonStore::new(blocker.join(DATA_FILE_NAME));
        assert!(!store.save(&Document::default()).await);
    }
}
