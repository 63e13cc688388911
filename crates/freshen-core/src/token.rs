use std::fmt;

/// Opaque identifier of the currently deployed build or version.
///
/// Only ever compared for equality: no `Ord`, no parsing. A build timestamp
/// and a semver string are both just tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionToken(String);

impl VersionToken {
    /// Placeholder sent on the bootstrap request, before any token is known.
    pub const UNKNOWN: &'static str = "unknown";

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The sentinel token used for the bootstrap request.
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for VersionToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VersionToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for VersionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
