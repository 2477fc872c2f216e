//! JSON-lines renderer for piping into other tools.
//!
//! One object per completed check, one summary object on shutdown.

use serde::Serialize;
use std::collections::VecDeque;

use super::Render;
use crate::probe::Outcome;
use crate::stats::StatsView;

#[derive(Debug, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct CheckEvent<'a> {
    event: &'static str,
    check: &'a Outcome,
    stats: &'a StatsView,
}

#[derive(Serialize)]
struct SummaryEvent<'a> {
    event: &'static str,
    stats: &'a StatsView,
}

impl Render for JsonRenderer {
    fn tick(&mut self, outcome: &Outcome, stats: &StatsView, _history: &VecDeque<Outcome>) {
        emit(&CheckEvent {
            event: "check",
            check: outcome,
            stats,
        });
    }

    fn summary(&mut self, stats: &StatsView) {
        emit(&SummaryEvent {
            event: "summary",
            stats,
        });
    }
}

fn emit<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{}", line),
        Err(e) => tracing::error!("failed to encode event: {}", e),
    }
}
