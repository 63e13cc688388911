//! The freshness poller.
//!
//! Bootstraps a seed token with the `unknown` sentinel, then asks the source
//! again every `interval` with that same seed. The first answer that differs
//! fires the reload trigger and ends the loop. Failed requests are dropped
//! and the next cycle is scheduled as usual.

mod reload;
mod source;
mod types;


use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::config::WatchConfig;
use crate::errors::PollError;
use crate::token::VersionToken;

pub use reload::{CommandReload, LogReload, ReloadTrigger, TOKEN_ENV_VAR};
pub use source::{HttpVersionSource, VersionSource};
pub use types::{PollOutcome, PollerExit};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct FreshnessPoller<S> {
    source: S,
    interval: Duration,
}

impl<S: VersionSource> FreshnessPoller<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Delay between a settled request and the next one.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the seed token using the `unknown` sentinel.
    ///
    /// Unlike [`poll`](Self::poll), failures here are returned: without a
    /// seed there is nothing to compare against.
    pub async fn initialize(&self) -> Result<VersionToken, PollError> {
        info!(event = "core.poller.bootstrap_started");

        match self.source.fetch(&VersionToken::unknown()).await {
            Ok(seed) => {
                info!(event = "core.poller.bootstrap_completed", token = %seed);
                Ok(seed)
            }
            Err(e) => {
                error!(
                    event = "core.poller.bootstrap_failed",
                    error = %e,
                    error_code = e.error_code(),
                );
                Err(e)
            }
        }
    }

    /// One fetch-and-compare against `known`. Never fails.
    pub async fn poll(&self, known: &VersionToken) -> PollOutcome {
        match self.source.fetch(known).await {
            Ok(observed) if observed == *known => PollOutcome::Unchanged,
            Ok(observed) => PollOutcome::Changed(observed),
            Err(e) => {
                debug!(
                    event = "core.poller.poll_ignored",
                    error = %e,
                    error_code = e.error_code(),
                );
                PollOutcome::Ignored(e)
            }
        }
    }

    /// Poll until the token differs from `known` or `cancel` fires.
    ///
    /// `known` is never replaced: every cycle compares against the seed.
    /// The next request is only issued once the previous one settled and
    /// `interval` elapsed, so cycles never overlap.
    pub async fn run<R>(
        &self,
        known: &VersionToken,
        trigger: &R,
        cancel: CancellationToken,
    ) -> PollerExit
    where
        R: ReloadTrigger,
    {
        info!(
            event = "core.poller.loop_started",
            token = %known,
            interval_ms = self.interval.as_millis() as u64,
        );

        loop {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                outcome = self.poll(known) => outcome,
            };

            if let PollOutcome::Changed(observed) = outcome {
                info!(
                    event = "core.poller.change_detected",
                    previous = %known,
                    token = %observed,
                );
                trigger.reload(&observed).await;
                return PollerExit::Reloaded(observed);
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!(event = "core.poller.loop_cancelled");
        PollerExit::Cancelled
    }

    /// [`initialize`](Self::initialize) then [`run`](Self::run).
    ///
    /// A bootstrap failure is returned before any poll request is made.
    pub async fn start<R>(
        &self,
        trigger: &R,
        cancel: CancellationToken,
    ) -> Result<PollerExit, PollError>
    where
        R: ReloadTrigger,
    {
        let seed = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Ok(PollerExit::Cancelled),
            seed = self.initialize() => seed?,
        };
        Ok(self.run(&seed, trigger, cancel).await)
    }
}

impl FreshnessPoller<HttpVersionSource> {
    /// Build an HTTP-backed poller from the `[watch]` config section.
    pub fn from_config(config: &WatchConfig) -> Result<Self, PollError> {
        let source =
            HttpVersionSource::new(config.base_url(), config.marker(), config.request_timeout())?;
        Ok(Self::new(source).with_interval(config.interval()))
    }
}
