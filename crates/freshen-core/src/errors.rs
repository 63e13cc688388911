/// A single poll request failed.
///
/// Inside the poll loop every variant is swallowed into
/// [`PollOutcome::Ignored`](crate::PollOutcome::Ignored); only the bootstrap
/// request surfaces it to the caller.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid marker URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("version source unavailable: {0}")]
    Unavailable(String),
}

impl PollError {
    /// Stable error code for structured logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            PollError::Request { .. } => "poll_request_failed",
            PollError::Status { .. } => "poll_bad_status",
            PollError::Body { .. } => "poll_body_failed",
            PollError::InvalidUrl { .. } => "poll_invalid_url",
            PollError::Unavailable(_) => "poll_source_unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PollError::Status {
            url: "http://localhost/api/version/unknown".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "request to http://localhost/api/version/unknown returned HTTP 503"
        );
        assert_eq!(err.error_code(), "poll_bad_status");
    }

    #[test]
    fn test_error_codes() {
        let cases: Vec<(PollError, &str)> = vec![
            (
                PollError::InvalidUrl {
                    url: "ftp://x".to_string(),
                    message: "unsupported scheme".to_string(),
                },
                "poll_invalid_url",
            ),
            (
                PollError::Unavailable("connection refused".to_string()),
                "poll_source_unavailable",
            ),
        ];

        for (err, expected_code) in cases {
            assert_eq!(err.error_code(), expected_code);
        }
    }
}
