//! Static per-category form schemas and the submit-time checks they drive.

use std::collections::HashMap;

use serde_json::{Number, Value};

use crate::errors::AppError;
use crate::models::{Category, Fields};

/// HTML input type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
        }
    }
}

/// One input of a category form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: InputKind::Text,
            required: false,
            min: None,
            max: None,
            placeholder: None,
        }
    }

    const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: InputKind::Number,
            ..Self::text(name, label)
        }
    }

    const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    const fn min(self, min: i64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    const fn range(self, min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder: Some(placeholder),
            ..self
        }
    }
}

static MOVIE_FIELDS: [FieldSpec; 5] = [
    FieldSpec::text("title", "Movie Title").required(),
    FieldSpec::text("director", "Director"),
    FieldSpec::number("year", "Year").range(1900, 2030),
    FieldSpec::text("genre", "Genre"),
    FieldSpec::number("rating", "Rating").range(1, 5),
];

static BOOK_FIELDS: [FieldSpec; 6] = [
    FieldSpec::text("title", "Book Title").required(),
    FieldSpec::text("author", "Author").required(),
    FieldSpec::number("year", "Year Published").range(1000, 2030),
    FieldSpec::text("genre", "Genre"),
    FieldSpec::number("pages", "Pages").min(1),
    FieldSpec::number("rating", "Rating").range(1, 5),
];

static SHOW_FIELDS: [FieldSpec; 6] = [
    FieldSpec::text("title", "Show Title").required(),
    FieldSpec::number("seasons", "Seasons Watched").min(1),
    FieldSpec::number("episodes", "Episodes Watched").min(1),
    FieldSpec::text("genre", "Genre"),
    FieldSpec::text("platform", "Platform").placeholder("Netflix, HBO, etc."),
    FieldSpec::number("rating", "Rating").range(1, 5),
];

/// Ordered form fields for `category`.
pub fn schema(category: Category) -> &'static [FieldSpec] {
    match category {
        Category::Movies => &MOVIE_FIELDS,
        Category::Books => &BOOK_FIELDS,
        Category::Shows => &SHOW_FIELDS,
    }
}

/// Turn raw form input into record fields.
///
/// Empty values are dropped. Schema number fields must be whole numbers within their
/// bounds and are stored as JSON numbers; anything outside the schema is kept as text.
pub fn prepare_submission(
    category: Category,
    raw: HashMap<String, String>,
) -> Result<Fields, AppError> {
    let specs = schema(category);
    let mut fields = Fields::new();

    for (name, value) in raw {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let spec = specs.iter().find(|s| s.name == name);
        let value = match spec {
            Some(spec) if spec.kind == InputKind::Number => {
                Value::Number(Number::from(parse_bounded(spec, value)?))
            }
            _ => Value::String(value.to_string()),
        };
        fields.insert(name, value);
    }

    if let Some(missing) = specs
        .iter()
        .find(|s| s.required && !fields.contains_key(s.name))
    {
        return Err(AppError::Validation(format!("{} is required", missing.label)));
    }

    Ok(fields)
}

fn parse_bounded(spec: &FieldSpec, value: &str) -> Result<i64, AppError> {
    let n: i64 = value
        .parse()
        .map_err(|_| AppError::Validation(format!("{} must be a whole number", spec.label)))?;

    if let Some(min) = spec.min.filter(|min| n < *min) {
        return Err(AppError::Validation(format!(
            "{} must be at least {}",
            spec.label, min
        )));
    }
    if let Some(max) = spec.max.filter(|max| n > *max) {
        return Err(AppError::Validation(format!(
            "{} must be at most {}",
            spec.label, max
        )));
    }
    Ok(n)
}
