use std::fmt::Write;

use pulldown_cmark_escape::{FmtWriter, escape_html};

use crate::build_info::BuildInfo;
use crate::notes::{DATE_FORMAT, Note};

/// Path the index page loads its reload script from.
pub const RELOAD_SCRIPT_PATH: &str = "/static/main.js";

/// Polls the build timestamp marker and reloads the page when it changes.
pub const RELOAD_SCRIPT: &str = include_str!("../static/main.js");

/// Render the notes index page.
///
/// Note bodies are already HTML; titles are escaped.
pub fn render_index(notes: &[Note], build: &BuildInfo) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Notes</title>\n</head>\n<body>\n<main>\n",
    );

    if notes.is_empty() {
        page.push_str("<p class=\"empty\">No notes yet.</p>\n");
    }

    for note in notes {
        page.push_str("<article>\n<h2>");
        let _ = escape_html(FmtWriter(&mut page), &note.title);
        let _ = write!(
            page,
            "</h2>\n<time datetime=\"{}\">{}</time>\n{}</article>\n",
            note.date.to_rfc3339(),
            note.date.format(DATE_FORMAT),
            note.content,
        );
    }

    page.push_str("</main>\n<footer>version ");
    let _ = escape_html(FmtWriter(&mut page), &build.version);
    page.push_str(" &middot; build ");
    let _ = escape_html(FmtWriter(&mut page), &build.build_timestamp);
    let _ = write!(
        page,
        "</footer>\n<script src=\"{RELOAD_SCRIPT_PATH}\"></script>\n</body>\n</html>\n"
    );

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::parse_note;

    #[test]
    fn test_render_orders_as_given_and_escapes_titles() {
        let notes = vec![
            parse_note("name: <b>New</b> & \"shiny\"\ndate: 2024-01-01 10:00\n\nfresh").unwrap(),
            parse_note("name: Old\ndate: 2020-01-01 10:00\n\nstale").unwrap(),
        ];
        let page = render_index(&notes, &BuildInfo::new("123", "0.1.0"));

        assert!(page.contains("<h2>&lt;b&gt;New&lt;/b&gt; &amp; &quot;shiny&quot;</h2>"));
        assert!(page.contains("<p>fresh</p>"));
        let new_at = page.find("shiny").unwrap();
        let old_at = page.find("Old").unwrap();
        assert!(new_at < old_at);
        assert!(page.contains("build 123"));
    }

    #[test]
    fn test_render_empty_index() {
        let page = render_index(&[], &BuildInfo::new("1", "0.1.0"));
        assert!(page.contains("No notes yet."));
    }

    #[test]
    fn test_index_loads_reload_script() {
        let page = render_index(&[], &BuildInfo::new("1", "0.1.0"));
        let script_at = page.find("<script src=\"/static/main.js\"></script>").unwrap();
        assert!(script_at < page.find("</body>").unwrap());
    }

    #[test]
    fn test_reload_script_polls_build_timestamp() {
        assert!(RELOAD_SCRIPT.contains("/api/build_timestamp/"));
        assert!(RELOAD_SCRIPT.contains("\"unknown\""));
        assert!(RELOAD_SCRIPT.contains("document.location.reload()"));
    }
}
