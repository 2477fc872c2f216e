//! Probe model: one timed request against the target, classified into an
//! outcome. Probe failures are data, not errors; nothing here aborts the
//! monitoring loop.

mod http;

pub use http::*;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Target;

/// Classified result of a single probe attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Response received with a 2xx/3xx status.
    Success { status: u16, latency_ms: f64 },
    /// Response received with any other status. Statuses outside the
    /// 200-599 range a server manages to emit land here too.
    HttpError { status: u16, latency_ms: f64 },
    /// Request exceeded the configured timeout.
    Timeout,
    /// Transport-level failure (DNS, refused, reset, TLS, ...).
    ConnectionFailure { detail: String },
}

/// One probe outcome, stamped with the wall-clock completion time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub completed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: OutcomeKind,
}

impl Outcome {
    /// Wrap a classification with the current completion timestamp.
    pub fn now(kind: OutcomeKind) -> Self {
        Self {
            completed_at: Utc::now(),
            kind,
        }
    }

    /// Measured latency, if this outcome carries one.
    pub fn latency_ms(&self) -> Option<f64> {
        match self.kind {
            OutcomeKind::Success { latency_ms, .. } | OutcomeKind::HttpError { latency_ms, .. } => {
                Some(latency_ms)
            }
            OutcomeKind::Timeout | OutcomeKind::ConnectionFailure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.kind, OutcomeKind::Success { .. })
    }
}

/// Classify a received HTTP status with its measured latency.
pub fn classify_status(status: u16, latency_ms: f64) -> OutcomeKind {
    if (200..=399).contains(&status) {
        OutcomeKind::Success { status, latency_ms }
    } else {
        OutcomeKind::HttpError { status, latency_ms }
    }
}

/// Abstract probe capability. Any transport that can time one request
/// against a target is substitutable here.
pub trait Probe {
    fn probe(&self, target: &Target) -> impl std::future::Future<Output = Outcome> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success_range() {
        assert!(matches!(
            classify_status(200, 12.0),
            OutcomeKind::Success { status: 200, .. }
        ));
        assert!(matches!(
            classify_status(301, 12.0),
            OutcomeKind::Success { status: 301, .. }
        ));
        assert!(matches!(
            classify_status(399, 12.0),
            OutcomeKind::Success { .. }
        ));
    }

    #[test]
    fn test_classify_error_range() {
        assert!(matches!(
            classify_status(400, 12.0),
            OutcomeKind::HttpError { status: 400, .. }
        ));
        assert!(matches!(
            classify_status(503, 12.0),
            OutcomeKind::HttpError { status: 503, .. }
        ));
    }

    #[test]
    fn test_classify_out_of_range_falls_to_http_error() {
        // 1xx should not surface from a completed request, but if the
        // protocol lets it through it must not crash the classifier.
        assert!(matches!(
            classify_status(101, 12.0),
            OutcomeKind::HttpError { status: 101, .. }
        ));
        assert!(matches!(
            classify_status(999, 12.0),
            OutcomeKind::HttpError { .. }
        ));
    }

    #[test]
    fn test_latency_only_on_response_outcomes() {
        let ok = Outcome::now(OutcomeKind::Success {
            status: 200,
            latency_ms: 42.0,
        });
        assert_eq!(ok.latency_ms(), Some(42.0));
        assert!(ok.is_success());

        let err = Outcome::now(OutcomeKind::HttpError {
            status: 500,
            latency_ms: 100.0,
        });
        assert_eq!(err.latency_ms(), Some(100.0));
        assert!(!err.is_success());

        let timeout = Outcome::now(OutcomeKind::Timeout);
        assert_eq!(timeout.latency_ms(), None);

        let conn = Outcome::now(OutcomeKind::ConnectionFailure {
            detail: "connection refused".into(),
        });
        assert_eq!(conn.latency_ms(), None);
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = Outcome::now(OutcomeKind::Success {
            status: 200,
            latency_ms: 42.0,
        });
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"result\":\"success\""));
        assert!(json.contains("\"status\":200"));
        assert!(json.contains("completed_at"));
    }
}
