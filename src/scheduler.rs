//! Monitoring loop controller.
//!
//! Drives the tick cycle: probe, fold into statistics, render, wait.
//! A single control task owns the statistics, so snapshots always reflect
//! fully-applied outcomes. Cancellation is cooperative and observed at the
//! two suspension points (probing and waiting).

use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;

use crate::config::Target;
use crate::probe::Probe;
use crate::render::Render;
use crate::stats::{Statistics, StatsView};

/// Loop controller for one monitoring session.
///
/// `run` consumes the controller; once stopped it cannot be restarted.
pub struct Monitor<P: Probe, R: Render> {
    target: Target,
    prober: P,
    renderer: R,
    stats: Statistics,
    cancel: CancellationToken,
}

impl<P: Probe, R: Render> Monitor<P, R> {
    pub fn new(target: Target, prober: P, renderer: R, cancel: CancellationToken) -> Self {
        Self {
            target,
            prober,
            renderer,
            stats: Statistics::new(),
            cancel,
        }
    }

    /// Run ticks until cancelled, then render one final summary and return
    /// the final snapshot.
    ///
    /// The first probe fires immediately. Wait time is the interval minus
    /// the elapsed tick time, floored at zero, so start-to-start cadence
    /// tracks the interval without compounding drift from slow probes.
    pub async fn run(mut self) -> StatsView {
        tracing::info!(url = %self.target.url, interval = ?self.target.interval, "starting monitor");

        loop {
            let tick_start = Instant::now();

            // A probe abandoned by cancellation contributes nothing.
            let outcome = tokio::select! {
                outcome = self.prober.probe(&self.target) => outcome,
                _ = self.cancel.cancelled() => break,
            };

            self.stats.record(outcome.clone());
            self.renderer
                .tick(&outcome, &self.stats.snapshot(), self.stats.recent());

            let wait = self.target.interval.saturating_sub(tick_start.elapsed());
            tokio::select! {
                _ = sleep(wait) => {}
                _ = self.cancel.cancelled() => break,
            }
        }

        let view = self.stats.snapshot();
        self.renderer.summary(&view);
        tracing::info!(total_checks = view.total_checks, "monitor stopped");
        view
    }
}
