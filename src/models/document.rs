//! The persisted root document.

use serde::{Deserialize, Serialize};

use super::{Category, Record};

/// All tracked media. Every category key is always present, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub movies: Vec<Record>,
    #[serde(default)]
    pub books: Vec<Record>,
    #[serde(default)]
    pub shows: Vec<Record>,
}

impl Document {
    pub fn records(&self, category: Category) -> &[Record] {
        match category {
            Category::Movies => &self.movies,
            Category::Books => &self.books,
            Category::Shows => &self.shows,
        }
    }

    pub fn records_mut(&mut self, category: Category) -> &mut Vec<Record> {
        match category {
            Category::Movies => &mut self.movies,
            Category::Books => &mut self.books,
            Category::Shows => &mut self.shows,
        }
    }

    pub fn find(&self, category: Category, id: &str) -> Option<&Record> {
        self.records(category).iter().find(|r| r.has_id(id))
    }

    pub fn total(&self) -> usize {
        self.movies.len() + self.books.len() + self.shows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_empty_document_serializes_all_keys() {
        let value = serde_json::to_value(Document::default()).unwrap();
        assert_eq!(value, json!({"movies": [], "books": [], "shows": []}));
    }

    #[test]
    fn test_missing_keys_deserialize_empty() {
        let doc: Document = serde_json::from_value(json!({"movies": [{"id": "1"}]})).unwrap();
        assert_eq!(doc.movies.len(), 1);
        assert!(doc.books.is_empty());
        assert!(doc.shows.is_empty());
    }

    #[test]
    fn test_unknown_record_fields_round_trip() {
        let raw = json!({
            "movies": [{"id": "1", "title": "Heat", "rewatchable": true, "cut": "director"}],
            "books": [],
            "shows": []
        });
        let doc: Document = serde_json::from_value(raw.clone()).unwrap();
        let back: Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_records_mut_targets_category() {
        let mut doc = Document::default();
        doc.records_mut(Category::Shows).push(Record::default());
        assert_eq!(doc.shows.len(), 1);
        assert_eq!(doc.total(), 1);
        assert!(doc.records(Category::Movies).is_empty());
    }
}
