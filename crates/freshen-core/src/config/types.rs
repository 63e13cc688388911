use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::marker::VersionMarker;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_INTERVAL_MS: u64 = 300;
pub const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 8000);
pub const DEFAULT_NOTES_DIR: &str = "notes";
pub const DEFAULT_HOLD_SECS: u64 = 30;

/// Top-level `config.toml` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FreshenConfig {
    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub server: ServerSettings,
}

/// `[watch]` section: the freshness poller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Server root, e.g. `http://127.0.0.1:8000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Marker endpoint to watch.
    /// Default: `build_timestamp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<VersionMarker>,

    /// Delay between the end of one poll and the start of the next.
    /// Default: 300 ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Per-request timeout. 0 or unset means requests may hang forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,

    /// Shell command run when the marker changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_change: Option<String>,
}

impl WatchConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn marker(&self) -> VersionMarker {
        self.marker.unwrap_or_default()
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_ms {
            Some(0) | None => None,
            Some(ms) => Some(Duration::from_millis(ms)),
        }
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            base_url: override_config.base_url.clone().or(base.base_url.clone()),
            marker: override_config.marker.or(base.marker),
            interval_ms: override_config.interval_ms.or(base.interval_ms),
            request_timeout_ms: override_config
                .request_timeout_ms
                .or(base.request_timeout_ms),
            on_change: override_config.on_change.clone().or(base.on_change.clone()),
        }
    }
}

/// `[server]` section: the marker and notes server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Listen address.
    /// Default: `127.0.0.1:8000`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<SocketAddr>,

    /// Directory holding `*.markdown` notes.
    /// Default: `notes`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_dir: Option<PathBuf>,

    /// How long a marker request naming the current token is held open.
    /// Default: 30 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_secs: Option<u64>,
}

impl ServerSettings {
    pub fn bind(&self) -> SocketAddr {
        self.bind.unwrap_or(SocketAddr::from(DEFAULT_BIND))
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.notes_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_DIR))
    }

    pub fn hold(&self) -> Duration {
        Duration::from_secs(self.hold_secs.unwrap_or(DEFAULT_HOLD_SECS))
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            bind: override_config.bind.or(base.bind),
            notes_dir: override_config.notes_dir.clone().or(base.notes_dir.clone()),
            hold_secs: override_config.hold_secs.or(base.hold_secs),
        }
    }
}
