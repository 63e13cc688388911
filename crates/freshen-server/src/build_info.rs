use freshen_core::{VersionMarker, VersionToken};

/// Tokens this binary publishes for each marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub build_timestamp: String,
    pub version: String,
}

impl BuildInfo {
    pub fn new(build_timestamp: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            build_timestamp: build_timestamp.into(),
            version: version.into(),
        }
    }

    /// Compile-time stamp from `build.rs` and the crate version.
    pub fn current() -> Self {
        Self::new(
            env!("FRESHEN_BUILD_TIMESTAMP"),
            env!("CARGO_PKG_VERSION"),
        )
    }

    pub fn token(&self, marker: VersionMarker) -> VersionToken {
        match marker {
            VersionMarker::BuildTimestamp => VersionToken::from(self.build_timestamp.as_str()),
            VersionMarker::Version => VersionToken::from(self.version.as_str()),
        }
    }
}
