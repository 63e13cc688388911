use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which marker endpoint to watch.
///
/// Both markers behave identically on the wire; they only differ in what the
/// server puts in the token (compile timestamp vs. crate version).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionMarker {
    #[default]
    BuildTimestamp,
    Version,
}

impl VersionMarker {
    pub const ALL: [VersionMarker; 2] = [VersionMarker::BuildTimestamp, VersionMarker::Version];

    /// Path segment under `/api/`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            VersionMarker::BuildTimestamp => "build_timestamp",
            VersionMarker::Version => "version",
        }
    }
}

impl fmt::Display for VersionMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for VersionMarker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "build_timestamp" => Ok(VersionMarker::BuildTimestamp),
            "version" => Ok(VersionMarker::Version),
            other => Err(format!(
                "unknown marker '{}' (expected 'build_timestamp' or 'version')",
                other
            )),
        }
    }
}
