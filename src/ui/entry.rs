//! Typed view of a stored record, used only for display.
//!
//! Storage keeps the open field map; this view picks out the fields each category knows
//! about so the list can show them in a fixed order.

use serde_json::Value;

use crate::models::{Category, Record};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movie {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub pages: Option<String>,
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Show {
    pub title: Option<String>,
    pub seasons: Option<String>,
    pub episodes: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub rating: Option<i64>,
}

/// A record seen through its category's schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEntry {
    Movie(Movie),
    Book(Book),
    Show(Show),
}

impl MediaEntry {
    pub fn from_record(category: Category, record: &Record) -> Self {
        let text = |field: &str| record.text(field);
        let rating = record.get("rating").and_then(parse_rating);

        match category {
            Category::Movies => MediaEntry::Movie(Movie {
                title: text("title"),
                director: text("director"),
                year: text("year"),
                genre: text("genre"),
                rating,
            }),
            Category::Books => MediaEntry::Book(Book {
                title: text("title"),
                author: text("author"),
                year: text("year"),
                genre: text("genre"),
                pages: text("pages"),
                rating,
            }),
            Category::Shows => MediaEntry::Show(Show {
                title: text("title"),
                seasons: text("seasons"),
                episodes: text("episodes"),
                genre: text("genre"),
                platform: text("platform"),
                rating,
            }),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            MediaEntry::Movie(m) => m.title.as_deref(),
            MediaEntry::Book(b) => b.title.as_deref(),
            MediaEntry::Show(s) => s.title.as_deref(),
        }
    }

    pub fn rating(&self) -> Option<i64> {
        match self {
            MediaEntry::Movie(m) => m.rating,
            MediaEntry::Book(b) => b.rating,
            MediaEntry::Show(s) => s.rating,
        }
    }

    /// Present detail fields as (label, value), in display order.
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        let pairs: Vec<(&'static str, &Option<String>)> = match self {
            MediaEntry::Movie(m) => vec![
                ("Director", &m.director),
                ("Year", &m.year),
                ("Genre", &m.genre),
            ],
            MediaEntry::Book(b) => vec![
                ("Author", &b.author),
                ("Year", &b.year),
                ("Pages", &b.pages),
                ("Genre", &b.genre),
            ],
            MediaEntry::Show(s) => vec![
                ("Seasons", &s.seasons),
                ("Episodes", &s.episodes),
                ("Platform", &s.platform),
                ("Genre", &s.genre),
            ],
        };

        pairs
            .into_iter()
            .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
            .collect()
    }
}

/// Integer value of a rating field.
///
/// Falsy values (`0`, `""`, `false`, `null`) mean "not rated". Numbers are truncated;
/// strings use their leading integer, so `"4 stars"` is 4 and `"great"` is unrated.
pub fn parse_rating(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            let f = n.as_f64()?;
            if f == 0.0 || !f.is_finite() {
                None
            } else {
                Some(f.trunc() as i64)
            }
        }
        Value::String(s) if !s.is_empty() => leading_integer(s),
        _ => None,
    }
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
