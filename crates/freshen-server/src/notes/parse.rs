use chrono::{DateTime, NaiveDateTime, Utc};
use pulldown_cmark::{Options, Parser, html};

use super::Note;
use super::errors::NoteParseError;

/// `date:` header format, interpreted as UTC.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a note: `key: value` header lines, a blank line, then markdown.
///
/// Recognized keys are `name` and `date`. A missing `name` leaves the title
/// empty and a missing `date` sorts the note at the Unix epoch.
pub fn parse_note(raw: &str) -> Result<Note, NoteParseError> {
    let normalized = raw.replace("\r\n", "\n");
    let (header, body) = normalized
        .split_once("\n\n")
        .ok_or(NoteParseError::MissingSeparator)?;

    let mut note = Note {
        title: String::new(),
        date: DateTime::<Utc>::UNIX_EPOCH,
        content: String::new(),
    };

    for line in header.lines() {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| NoteParseError::MalformedHeader {
                line: line.to_string(),
            })?;
        let value = value.trim();

        match key.trim() {
            "name" => note.title = value.to_string(),
            "date" => {
                note.date = NaiveDateTime::parse_from_str(value, DATE_FORMAT)
                    .map_err(|e| NoteParseError::InvalidDate {
                        value: value.to_string(),
                        message: e.to_string(),
                    })?
                    .and_utc();
            }
            other => {
                return Err(NoteParseError::UnknownHeader {
                    key: other.to_string(),
                });
            }
        }
    }

    let parser = Parser::new_ext(body, Options::ENABLE_TABLES);
    html::push_html(&mut note.content, parser);

    Ok(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_full_note() {
        let note = parse_note("name: First post\ndate: 2024-05-01 18:30\n\nHello *world*.\n").unwrap();
        assert_eq!(note.title, "First post");
        assert_eq!(
            note.date,
            Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap()
        );
        assert_eq!(note.content, "<p>Hello <em>world</em>.</p>\n");
    }

    #[test]
    fn test_value_may_contain_colon() {
        let note = parse_note("name: Re: the plan\n\nbody").unwrap();
        assert_eq!(note.title, "Re: the plan");
        assert_eq!(note.date, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_tables_enabled() {
        let note = parse_note("name: t\n\n| a | b |\n|---|---|\n| 1 | 2 |\n").unwrap();
        assert!(note.content.contains("<table>"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let note = parse_note("name: Windows\r\ndate: 2023-01-02 03:04\r\n\r\nbody\r\n").unwrap();
        assert_eq!(note.title, "Windows");
        assert_eq!(
            note.date,
            Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            parse_note("name: x\nno blank line").unwrap_err(),
            NoteParseError::MissingSeparator
        );
    }

    #[test]
    fn test_malformed_header_line() {
        assert_eq!(
            parse_note("just words\n\nbody").unwrap_err(),
            NoteParseError::MalformedHeader {
                line: "just words".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_header() {
        assert_eq!(
            parse_note("author: me\n\nbody").unwrap_err(),
            NoteParseError::UnknownHeader {
                key: "author".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let err = parse_note("date: yesterday\n\nbody").unwrap_err();
        assert!(matches!(err, NoteParseError::InvalidDate { ref value, .. } if value == "yesterday"));
    }
}
