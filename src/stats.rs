//! Streaming session statistics.
//!
//! Numeric aggregates are O(1) in session length; no raw latency list is
//! retained. The only per-outcome storage is the bounded recent-history
//! buffer used for display.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

use crate::probe::Outcome;

/// Recent-history capacity. Display-only; eviction is FIFO.
pub const HISTORY_LEN: usize = 10;

/// Single-writer statistics accumulator for one monitoring session.
#[derive(Debug)]
pub struct Statistics {
    started_at: DateTime<Utc>,
    total_checks: u64,
    success_checks: u64,
    min_latency_ms: Option<f64>,
    max_latency_ms: Option<f64>,
    sum_latency_ms: f64,
    latency_samples: u64,
    recent: VecDeque<Outcome>,
}

impl Statistics {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            total_checks: 0,
            success_checks: 0,
            min_latency_ms: None,
            max_latency_ms: None,
            sum_latency_ms: 0.0,
            latency_samples: 0,
            recent: VecDeque::with_capacity(HISTORY_LEN),
        }
    }

    /// Fold one completed probe in. Sole mutator; called exactly once per
    /// probe, failed probes included.
    pub fn record(&mut self, outcome: Outcome) {
        self.total_checks += 1;

        if outcome.is_success() {
            self.success_checks += 1;
        }

        if let Some(latency_ms) = outcome.latency_ms() {
            self.latency_samples += 1;
            self.sum_latency_ms += latency_ms;
            self.min_latency_ms = Some(match self.min_latency_ms {
                Some(min) => min.min(latency_ms),
                None => latency_ms,
            });
            self.max_latency_ms = Some(match self.max_latency_ms {
                Some(max) => max.max(latency_ms),
                None => latency_ms,
            });
        }

        self.recent.push_back(outcome);
        if self.recent.len() > HISTORY_LEN {
            self.recent.pop_front();
        }
    }

    /// Read-only copy of the current aggregates.
    pub fn snapshot(&self) -> StatsView {
        StatsView {
            started_at: self.started_at,
            total_checks: self.total_checks,
            success_checks: self.success_checks,
            failure_checks: self.total_checks - self.success_checks,
            success_rate: if self.total_checks > 0 {
                self.success_checks as f64 / self.total_checks as f64 * 100.0
            } else {
                0.0
            },
            min_latency_ms: self.min_latency_ms,
            max_latency_ms: self.max_latency_ms,
            avg_latency_ms: if self.latency_samples > 0 {
                Some(self.sum_latency_ms / self.latency_samples as f64)
            } else {
                None
            },
            latency_samples: self.latency_samples,
        }
    }

    /// Last `HISTORY_LEN` outcomes in chronological order.
    pub fn recent(&self) -> &VecDeque<Outcome> {
        &self.recent
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable point-in-time view of the session statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub started_at: DateTime<Utc>,
    pub total_checks: u64,
    pub success_checks: u64,
    pub failure_checks: u64,
    /// Percent in [0, 100]; 0 when no checks have completed.
    pub success_rate: f64,
    pub min_latency_ms: Option<f64>,
    pub max_latency_ms: Option<f64>,
    pub avg_latency_ms: Option<f64>,
    pub latency_samples: u64,
}
