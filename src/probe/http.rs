//! HTTP probe implementation.

use reqwest::Client;
use std::time::Instant;

use super::{classify_status, Outcome, OutcomeKind, Probe};
use crate::config::{ConfigError, Target};

/// Probe transport backed by a single reqwest client.
///
/// The client enforces the configured timeout itself; the probe never
/// relies on transport defaults.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(target: &Target) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(target.timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Probe for HttpProber {
    /// Issue one GET and classify the raw result.
    ///
    /// Latency runs from just before the request until the response status
    /// is known; the body is not read.
    async fn probe(&self, target: &Target) -> Outcome {
        let start = Instant::now();
        let result = self.client.get(target.url.clone()).send().await;
        let elapsed = start.elapsed();

        let kind = match result {
            Ok(_) if elapsed >= target.timeout => OutcomeKind::Timeout,
            Ok(response) => {
                classify_status(response.status().as_u16(), elapsed.as_secs_f64() * 1000.0)
            }
            Err(e) if e.is_timeout() || elapsed >= target.timeout => OutcomeKind::Timeout,
            Err(e) => OutcomeKind::ConnectionFailure {
                detail: root_cause(&e),
            },
        };

        match &kind {
            OutcomeKind::Timeout => tracing::debug!(url = %target.url, "probe timed out"),
            OutcomeKind::ConnectionFailure { detail } => {
                tracing::debug!(url = %target.url, %detail, "probe failed to connect")
            }
            _ => {}
        }

        Outcome::now(kind)
    }
}

/// Innermost cause of a transport error, for a short human-readable detail.
fn root_cause(err: &reqwest::Error) -> String {
    let mut cause: &dyn std::error::Error = err;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause.to_string()
}
