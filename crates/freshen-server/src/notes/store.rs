use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::Note;
use super::errors::NoteError;
use super::parse::parse_note;

pub const NOTE_EXTENSION: &str = "markdown";

/// Read every `*.markdown` file in `dir`, newest first.
///
/// Any unreadable or unparsable note fails the whole load.
pub fn read_notes(dir: &Path) -> Result<Vec<Note>, NoteError> {
    let entries = fs::read_dir(dir).map_err(|source| NoteError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut notes = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| NoteError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();

        if path.extension().is_none_or(|ext| ext != NOTE_EXTENSION) {
            continue;
        }

        let raw = fs::read_to_string(&path).map_err(|source| NoteError::Io {
            path: path.clone(),
            source,
        })?;
        let note = parse_note(&raw).map_err(|source| NoteError::Parse {
            path: path.clone(),
            source,
        })?;
        debug!(event = "server.notes.parsed", path = %path.display(), title = %note.title);
        notes.push(note);
    }

    notes.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(notes)
}

/// Like [`read_notes`], but a missing directory yields no notes.
pub fn load_notes(dir: &Path) -> Result<Vec<Note>, NoteError> {
    if !dir.exists() {
        warn!(
            event = "server.notes.dir_missing",
            path = %dir.display(),
            "Notes directory does not exist; serving an empty index",
        );
        return Ok(Vec::new());
    }

    let notes = read_notes(dir)?;
    info!(event = "server.notes.loaded", path = %dir.display(), count = notes.len());
    Ok(notes)
}
