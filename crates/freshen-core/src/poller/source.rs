use std::future::Future;
use std::time::Duration;

use reqwest::Url;

use crate::errors::PollError;
use crate::marker::VersionMarker;
use crate::token::VersionToken;

/// Something that answers "what is the current token?" given the last known one.
pub trait VersionSource: Send + Sync {
    fn fetch(
        &self,
        known: &VersionToken,
    ) -> impl Future<Output = Result<VersionToken, PollError>> + Send;
}

/// Fetches tokens from `GET {base}/api/{marker}/{known}` as plain text.
#[derive(Debug, Clone)]
pub struct HttpVersionSource {
    client: reqwest::Client,
    base_url: Url,
    marker: VersionMarker,
}

impl HttpVersionSource {
    /// Build a source for `base_url`.
    ///
    /// `request_timeout` of `None` leaves requests unbounded, so a hung
    /// server stalls the cycle rather than failing it.
    pub fn new(
        base_url: &str,
        marker: VersionMarker,
        request_timeout: Option<Duration>,
    ) -> Result<Self, PollError> {
        let url = Url::parse(base_url).map_err(|e| PollError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(PollError::InvalidUrl {
                url: base_url.to_string(),
                message: "expected an http:// or https:// base URL".to_string(),
            });
        }

        let mut builder =
            reqwest::Client::builder().user_agent(concat!("freshen/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PollError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: url,
            marker,
        })
    }

    pub fn marker(&self) -> VersionMarker {
        self.marker
    }

    /// Endpoint for `known`. The token is percent-encoded as one path segment.
    pub fn endpoint(&self, known: &VersionToken) -> Result<Url, PollError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| PollError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(["api", self.marker.path_segment(), known.as_str()]);
        Ok(url)
    }
}

impl VersionSource for HttpVersionSource {
    async fn fetch(&self, known: &VersionToken) -> Result<VersionToken, PollError> {
        let url = self.endpoint(known)?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| PollError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| PollError::Body {
            url: url.to_string(),
            source,
        })?;

        Ok(VersionToken::from(body))
    }
}
