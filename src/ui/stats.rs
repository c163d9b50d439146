//! Summary counts and the active category's average rating.

use crate::models::{Category, Document};

use super::entry::parse_rating;

/// Recomputed on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub movies: usize,
    pub books: usize,
    pub shows: usize,
    /// Mean rating of the active category, `None` when nothing there is rated.
    pub average_rating: Option<f64>,
}

impl Stats {
    /// Average rating to one decimal, or `N/A`.
    pub fn average_display(&self) -> String {
        match self.average_rating {
            Some(avg) => format!("{:.1}", avg),
            None => "N/A".to_string(),
        }
    }
}

pub fn compute_stats(doc: &Document, active: Category) -> Stats {
    Stats {
        total: doc.total(),
        movies: doc.movies.len(),
        books: doc.books.len(),
        shows: doc.shows.len(),
        average_rating: average_rating(doc, active),
    }
}

fn average_rating(doc: &Document, category: Category) -> Option<f64> {
    let ratings: Vec<i64> = doc
        .records(category)
        .iter()
        .filter_map(|r| r.get("rating").and_then(parse_rating))
        .collect();

    if ratings.is_empty() {
        return None;
    }
    let sum: f64 = ratings.iter().map(|&r| r as f64).sum();
    Some(sum / ratings.len() as f64)
}
