//! Presentation session: the active category plus a local copy of the document.
//!
//! The copy only changes when a mutation through the record service succeeds, so it never
//! drifts ahead of what is on disk. Failures leave the data alone and raise a notice that
//! the next render shows once.

use std::collections::HashMap;

use crate::errors::AppError;
use crate::models::{Category, Document, Record};
use crate::service::RecordService;

use super::render::render_page;
use super::schema::prepare_submission;
use super::stats::{compute_stats, Stats};

#[derive(Debug, Clone, Default)]
pub struct Session {
    active: Category,
    data: Document,
    notice: Option<String>,
}

impl Session {
    pub fn new(data: Document) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Start a session from the current stored document.
    pub async fn open(service: &RecordService) -> Self {
        Self::new(service.list_all().await)
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn data(&self) -> &Document {
        &self.data
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn switch_category(&mut self, category: Category) {
        self.active = category;
    }

    /// Record a failure to show on the next render.
    pub fn report(&mut self, err: &AppError) {
        tracing::warn!("Presentation action failed: {}", err);
        self.notice = Some(err.message());
    }

    /// Validate form input and add it to `category`.
    pub async fn submit(
        &mut self,
        service: &RecordService,
        category: Category,
        raw: HashMap<String, String>,
    ) -> Result<Record, AppError> {
        let result = match prepare_submission(category, raw) {
            Ok(fields) => service.add(category.as_str(), fields).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(record) => {
                self.data.records_mut(category).push(record.clone());
                self.notice = None;
                Ok(record)
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    pub async fn remove_item(
        &mut self,
        service: &RecordService,
        category: Category,
        id: &str,
    ) -> Result<(), AppError> {
        match service.remove(category.as_str(), id).await {
            Ok(()) => {
                self.data.records_mut(category).retain(|r| !r.has_id(id));
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    pub fn stats(&self) -> Stats {
        compute_stats(&self.data, self.active)
    }

    /// Render the page for the active category and clear any pending notice.
    pub fn render(&mut self) -> String {
        let notice = self.notice.take();
        render_page(
            self.active,
            self.data.records(self.active),
            &self.stats(),
            notice.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JsonStore, DATA_FILE_NAME};
    use serde_json::json;
    use tempfile::TempDir;

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    async fn service_in(dir: &TempDir) -> RecordService {
        let store = JsonStore::new(dir.path().join(DATA_FILE_NAME));
        store.initialize().await.unwrap();
        RecordService::new(store)
    }

    #[tokio::test]
    async fn test_starts_on_movies() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir).await;
        let session = Session::open(&service).await;

        assert_eq!(session.active(), Category::Movies);
        assert_eq!(session.data(), &Document::default());
    }

    #[tokio::test]
    async fn test_submit_mirrors_stored_record() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir).await;
        let mut session = Session::open(&service).await;

        let record = session
            .submit(
                &service,
                Category::Movies,
                raw(&[("title", "Heat"), ("rating", "4"), ("genre", "")]),
            )
            .await
            .unwrap();

        assert_eq!(record.get("rating"), Some(&json!(4)));
        assert!(record.get("genre").is_none());
        assert_eq!(session.data().movies, vec![record]);
        assert_eq!(session.data(), &service.list_all().await);
        assert_eq!(session.stats().average_display(), "4.0");
    }

    #[tokio::test]
    async fn test_invalid_submit_sets_notice_without_writing() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir).await;
        let mut session = Session::open(&service).await;
        session.switch_category(Category::Books);

        let result = session
            .submit(&service, Category::Books, raw(&[("title", "Dune")]))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(session.data().books.is_empty());
        assert!(service.list_all().await.books.is_empty());
        assert_eq!(session.notice(), Some("Author is required"));

        let page = session.render();
        assert!(page.contains("Author is required"));
        assert_eq!(session.notice(), None);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_local_copy() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "plain file").unwrap();
        let service = RecordService::new(JsonStore::new(blocker.join(DATA_FILE_NAME)));
        let mut session = Session::open(&service).await;

        let result = session
            .submit(&service, Category::Movies, raw(&[("title", "Heat")]))
            .await;

        assert!(matches!(result, Err(AppError::Storage(_))));
        assert!(session.data().movies.is_empty());
        assert!(session.notice().is_some());
    }

    #[tokio::test]
    async fn test_remove_item_filters_local_copy() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir).await;
        let mut session = Session::open(&service).await;
        session.switch_category(Category::Shows);

        let lost = session
            .submit(&service, Category::Shows, raw(&[("title", "Lost")]))
            .await
            .unwrap();
        let kept = session
            .submit(&service, Category::Shows, raw(&[("title", "Severance")]))
            .await
            .unwrap();

        session
            .remove_item(&service, Category::Shows, &lost.id().unwrap())
            .await
            .unwrap();

        assert_eq!(session.data().shows, vec![kept]);
        assert_eq!(session.data(), &service.list_all().await);
        assert_eq!(session.stats().total, 1);
    }

    #[tokio::test]
    async fn test_render_shows_active_category_only() {
        let mut session = Session::new(Document::default());
        session.switch_category(Category::Shows);

        let page = session.render();
        assert!(page.contains("No shows added yet"));
        assert!(page.contains("Show Title"));
        assert!(!page.contains("Movie Title"));
    }
}
