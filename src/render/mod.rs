//! Presentation boundary.
//!
//! The monitor loop hands immutable snapshots to a renderer after every
//! tick and once more on shutdown; formatting decisions all live behind
//! this trait.

mod json;
mod terminal;

pub use json::*;
pub use terminal::*;

use std::collections::VecDeque;

use crate::probe::Outcome;
use crate::stats::StatsView;

/// Rendering hooks driven by the monitor loop.
pub trait Render {
    /// Called after every completed tick with the latest outcome, the
    /// current statistics snapshot, and the bounded recent history in
    /// chronological order.
    fn tick(&mut self, outcome: &Outcome, stats: &StatsView, history: &VecDeque<Outcome>);

    /// Called exactly once on shutdown with the final snapshot.
    fn summary(&mut self, stats: &StatsView);
}
