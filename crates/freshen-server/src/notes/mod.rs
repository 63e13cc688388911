//! Markdown notes shown on the index page.
//!
//! A note file looks like:
//!
//! ```text
//! name: Release notes
//! date: 2024-05-01 18:30
//!
//! Markdown *body*.
//! ```

mod errors;
mod parse;
mod store;

pub use errors::{NoteError, NoteParseError};
pub use parse::{DATE_FORMAT, parse_note};
pub use store::{NOTE_EXTENSION, load_notes, read_notes};

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub date: DateTime<Utc>,
    /// Body rendered to HTML.
    pub content: String,
}
