//! Media categories. Each selects a schema and a sequence in the document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three tracked media kinds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Movies,
    Books,
    Shows,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 3] = [Category::Movies, Category::Books, Category::Shows];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Movies => "movies",
            Category::Books => "books",
            Category::Shows => "shows",
        }
    }

    /// Singular noun used in prose, e.g. "movie".
    pub fn singular(&self) -> &'static str {
        match self {
            Category::Movies => "movie",
            Category::Books => "book",
            Category::Shows => "show",
        }
    }

    /// Capitalized tab label.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Movies => "Movies",
            Category::Books => "Books",
            Category::Shows => "Shows",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movies" => Ok(Category::Movies),
            "books" => Ok(Category::Books),
            "shows" => Ok(Category::Shows),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
