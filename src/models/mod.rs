//! Data models for the media tracker.
//!
//! The storage layer keeps records as open field maps so that extra fields round-trip untouched.

mod category;
mod document;
mod record;

pub use category::*;
pub use document::*;
pub use record::*;
