//! Record service: list, add, remove and update over the JSON store.
//!
//! Every call is a full load-modify-save cycle. Cycles are serialized with an async mutex
//! so two mutations in this process never interleave between load and save.

mod ids;

pub use ids::IdGenerator;

use chrono::{SecondsFormat, Utc};
use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::models::{Category, Document, Fields, Record};
use crate::store::JsonStore;

/// CRUD operations on the media document.
#[derive(Debug)]
pub struct RecordService {
    store: JsonStore,
    cycle: Mutex<()>,
    ids: IdGenerator,
}

impl RecordService {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            cycle: Mutex::new(()),
            ids: IdGenerator::new(),
        }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Return the whole document as stored.
    pub async fn list_all(&self) -> Document {
        let _cycle = self.cycle.lock().await;
        self.store.load().await
    }

    /// Append a new record to `category`, assigning `id` and `dateAdded`.
    pub async fn add(&self, category: &str, fields: Fields) -> Result<Record, AppError> {
        let category: Category = category.parse()?;
        let _cycle = self.cycle.lock().await;

        let mut doc = self.store.load().await;

        let now = Utc::now();
        let mut id = self.ids.next(now.timestamp_millis()).to_string();
        while doc.find(category, &id).is_some() {
            id = self.ids.next(now.timestamp_millis()).to_string();
        }

        let record = Record::create(
            fields,
            id,
            now.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        doc.records_mut(category).push(record.clone());

        self.persist(&doc).await?;
        tracing::debug!(category = %category, id = ?record.id(), "Added media item");
        Ok(record)
    }

    /// Remove the record with `id`. A missing id is not an error.
    pub async fn remove(&self, category: &str, id: &str) -> Result<(), AppError> {
        let category: Category = category.parse()?;
        let _cycle = self.cycle.lock().await;

        let mut doc = self.store.load().await;
        let records = doc.records_mut(category);
        let before = records.len();
        records.retain(|r| !r.has_id(id));
        let removed = before - records.len();

        self.persist(&doc).await?;
        tracing::debug!(category = %category, id, removed, "Removed media item");
        Ok(())
    }

    /// Shallow-merge `patch` into the record with `id`.
    pub async fn update(&self, category: &str, id: &str, patch: Fields) -> Result<Record, AppError> {
        let category: Category = category.parse()?;
        let _cycle = self.cycle.lock().await;

        let mut doc = self.store.load().await;
        let record = doc
            .records_mut(category)
            .iter_mut()
            .find(|r| r.has_id(id))
            .ok_or_else(|| AppError::NotFound(format!("No {} item with id {}", category, id)))?;

        record.merge(patch);
        let updated = record.clone();

        self.persist(&doc).await?;
        tracing::debug!(category = %category, id, "Updated media item");
        Ok(updated)
    }

    async fn persist(&self, doc: &Document) -> Result<(), AppError> {
        // `save` logs its own failure; callers only need the outcome.
        if self.store.save(doc).await {
            Ok(())
        } else {
            Err(AppError::Storage("Failed to save media data".to_string()))
        }
    }
}
