use std::io;
use std::path::PathBuf;

/// Why a single note's text could not be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NoteParseError {
    #[error("header must be separated from the body by a blank line")]
    MissingSeparator,

    #[error("expected 'key: value' in header, got '{line}'")]
    MalformedHeader { line: String },

    #[error("unknown header attribute '{key}'")]
    UnknownHeader { key: String },

    #[error("invalid date '{value}' (expected YYYY-MM-DD HH:MM): {message}")]
    InvalidDate { value: String, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("cannot read notes from '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid note '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: NoteParseError,
    },
}
