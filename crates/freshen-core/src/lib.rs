//! freshen-core: version markers and the freshness poller
//!
//! The poller asks a server for an opaque version token and fires a reload
//! trigger the first time the answer differs from the token it started with.
//! This crate is used by the CLI (`freshen watch`) and by the server crate,
//! which publishes the same markers the poller watches.
//!
//! # Main Entry Points
//!
//! - [`poller`] - Bootstrap, poll, and the cancellable poll loop
//! - [`config`] - TOML configuration hierarchy
//! - [`logging`] - Structured JSON logging setup

pub mod config;
pub mod errors;
pub mod logging;
pub mod marker;
pub mod poller;
pub mod token;

pub use config::{ConfigError, FreshenConfig, ServerSettings, WatchConfig};
pub use errors::PollError;
pub use marker::VersionMarker;
pub use poller::{
    CommandReload, FreshnessPoller, HttpVersionSource, LogReload, PollOutcome, PollerExit,
    ReloadTrigger, VersionSource,
};
pub use token::VersionToken;

// Re-export logging initialization
pub use logging::init_logging;
