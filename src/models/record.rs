//! Open media record: any scalar fields plus the system-assigned `id` and `dateAdded`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field name -> scalar value, as sent by clients and stored on disk.
pub type Fields = Map<String, Value>;

pub const ID_FIELD: &str = "id";
pub const DATE_ADDED_FIELD: &str = "dateAdded";

/// A single user-entered item. Unknown fields are preserved as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Fields);

impl Record {
    /// Build a new record from caller fields, stamping the system fields over them.
    pub fn create(mut fields: Fields, id: String, date_added: String) -> Self {
        fields.insert(ID_FIELD.to_string(), Value::String(id));
        fields.insert(DATE_ADDED_FIELD.to_string(), Value::String(date_added));
        Self(fields)
    }

    pub fn from_fields(fields: Fields) -> Self {
        Self(fields)
    }

    /// Record id. Ids are strings; records written by hand with a numeric id still match.
    pub fn id(&self) -> Option<String> {
        match self.0.get(ID_FIELD)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id().as_deref() == Some(id)
    }

    pub fn date_added(&self) -> Option<&str> {
        self.0.get(DATE_ADDED_FIELD).and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field rendered as display text. Empty strings count as absent.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Shallow merge: every patch key overwrites, everything else is kept.
    pub fn merge(&mut self, patch: Fields) {
        for (key, value) in patch {
            self.0.insert(key, value);
        }
    }
}

/// Reject values that are not scalars (string, number, bool).
pub fn check_scalar_fields(fields: &Fields) -> Result<(), String> {
    for (key, value) in fields {
        match value {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {}
            _ => return Err(format!("Field '{}' must be a string or number", key)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_create_overrides_system_fields() {
        let record = Record::create(
            fields(json!({"title": "Dune", "id": "spoofed", "dateAdded": "yesterday"})),
            "1700000000000".to_string(),
            "2026-10-19T12:00:00.000Z".to_string(),
        );

        assert_eq!(record.id().as_deref(), Some("1700000000000"));
        assert_eq!(record.date_added(), Some("2026-10-19T12:00:00.000Z"));
        assert_eq!(record.text("title").as_deref(), Some("Dune"));
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut record = Record::from_fields(fields(json!({
            "id": "1",
            "title": "Alien",
            "genre": "Horror",
            "year": 1979
        })));

        record.merge(fields(json!({"genre": "Sci-Fi", "rating": 5})));

        assert_eq!(record.get("genre"), Some(&json!("Sci-Fi")));
        assert_eq!(record.get("rating"), Some(&json!(5)));
        assert_eq!(record.get("year"), Some(&json!(1979)));
        assert_eq!(record.id().as_deref(), Some("1"));
    }

    #[test]
    fn test_numeric_id_matches() {
        let record = Record::from_fields(fields(json!({"id": 42})));
        assert!(record.has_id("42"));
        assert!(!record.has_id("43"));
    }

    #[test]
    fn test_check_scalar_fields() {
        assert!(check_scalar_fields(&fields(json!({"title": "x", "year": 2000}))).is_ok());
        assert!(check_scalar_fields(&fields(json!({"tags": ["a"]}))).is_err());
        assert!(check_scalar_fields(&fields(json!({"meta": {"a": 1}}))).is_err());
        assert!(check_scalar_fields(&fields(json!({"title": null}))).is_err());
    }
}
