//! Presentation layer.
//!
//! Schema-driven forms, item lists and summary stats for one active category.

mod entry;
mod render;
mod schema;
mod session;
mod stats;

pub use session::Session;
