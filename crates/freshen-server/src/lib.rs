//! freshen-server: publishes the markers `freshen watch` polls.
//!
//! Serves `GET /api/build_timestamp/{expected}` and `GET /api/version/{expected}`
//! (long-polled when `expected` is already current) next to a small notes
//! index rendered from markdown files.

pub mod build_info;
pub mod errors;
pub mod notes;
pub mod render;
pub mod server;
pub mod types;

pub use build_info::BuildInfo;
pub use errors::ServerError;
pub use notes::{Note, NoteError, NoteParseError, load_notes, parse_note, read_notes};
pub use server::{AppState, router, run_server, serve_listener};
pub use types::ServerConfig;
