use crate::errors::PollError;
use crate::token::VersionToken;

/// Result of a single poll cycle.
#[derive(Debug)]
pub enum PollOutcome {
    /// The server still reports the seed token.
    Unchanged,
    /// The server reports a different token. Terminal for the loop.
    Changed(VersionToken),
    /// The request failed; the failure is dropped and polling continues.
    Ignored(PollError),
}

impl PollOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, PollOutcome::Changed(_))
    }
}

/// Why the poll loop returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollerExit {
    /// A new token was observed and the reload trigger fired.
    Reloaded(VersionToken),
    /// The cancellation token fired before any change was seen.
    Cancelled,
}
