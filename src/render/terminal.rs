//! Colored full-screen terminal renderer.
//!
//! Redraws the whole view each tick: banner, latest check, statistics
//! block, recent-check history. Color capability (NO_COLOR, non-tty) is
//! handled by the `colored` crate.

use chrono::{DateTime, Local, Utc};
use colored::{ColoredString, Colorize};
use std::collections::VecDeque;

use super::Render;
use crate::config::Target;
use crate::probe::{Outcome, OutcomeKind};
use crate::stats::StatsView;

const BANNER: &str = "==================================";

pub struct TerminalRenderer {
    url: String,
    interval_secs: f64,
}

impl TerminalRenderer {
    pub fn new(target: &Target) -> Self {
        Self {
            url: target.url.to_string(),
            interval_secs: target.interval.as_secs_f64(),
        }
    }

    fn print_header(&self, stats: &StatsView) {
        // Clear screen and move the cursor home.
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", BANNER.cyan());
        println!("{}", "     TERMINAL WEBSITE MONITOR     ".cyan().bold());
        println!("{}", BANNER.cyan());
        println!("Monitoring: {}", self.url.cyan());
        println!(
            "Interval: {}",
            format!("{} seconds", self.interval_secs).cyan()
        );
        println!("Started at: {}", format_local(stats.started_at).cyan());
        println!("{}", BANNER.cyan());
        println!("Press Ctrl+C to exit\n");
    }
}

impl Render for TerminalRenderer {
    fn tick(&mut self, outcome: &Outcome, stats: &StatsView, history: &VecDeque<Outcome>) {
        self.print_header(stats);
        println!("{}", status_line(outcome));
        print!("{}", stats_block(stats));

        // Prior checks only; the current one is already on screen.
        if history.len() > 1 {
            println!();
            println!("{}", "--- Recent Checks ---".blue());
            for past in history.iter().take(history.len() - 1) {
                println!("{}", status_line(past));
            }
        }
    }

    fn summary(&mut self, stats: &StatsView) {
        print!("{}", summary_block(&self.url, stats));
    }
}

fn format_local(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// One `[indicator] timestamp - status - latency` line.
fn status_line(outcome: &Outcome) -> String {
    let (indicator, label) = match &outcome.kind {
        OutcomeKind::Success { status, .. } => {
            ("[✓]".green(), format!("Online (HTTP {})", status).green())
        }
        OutcomeKind::HttpError { status, .. } => {
            ("[!]".yellow(), format!("Error (HTTP {})", status).yellow())
        }
        OutcomeKind::Timeout => ("[✗]".red(), "Timeout".red()),
        OutcomeKind::ConnectionFailure { detail } => {
            ("[✗]".red(), format!("Connection Failed ({})", detail).red())
        }
    };

    let timestamp = format_local(outcome.completed_at).dimmed();

    match outcome.latency_ms() {
        Some(ms) => format!("{} {} - {} - {}", indicator, timestamp, label, latency(ms)),
        None => format!("{} {} - {}", indicator, timestamp, label),
    }
}

/// Latency colored by threshold: fast green, middling yellow, slow red.
fn latency(ms: f64) -> ColoredString {
    let text = format!("{:.0} ms", ms);
    if ms < 100.0 {
        text.green()
    } else if ms < 300.0 {
        text.yellow()
    } else {
        text.red()
    }
}

fn fmt_ms(value: Option<f64>) -> String {
    match value {
        Some(ms) => format!("{:.0} ms", ms),
        None => "N/A".to_string(),
    }
}

fn fmt_avg(value: Option<f64>) -> String {
    match value {
        Some(ms) => format!("{:.1} ms", ms),
        None => "N/A".to_string(),
    }
}

fn stats_block(stats: &StatsView) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{}\n", "--- Statistics ---".blue()));

    if stats.total_checks == 0 {
        out.push_str(&format!("{}\n", "No data collected yet".dimmed()));
        return out;
    }

    out.push_str(&format!("Checks: {}\n", stats.total_checks));
    out.push_str(&format!(
        "Success Rate: {}\n",
        format!("{:.1}%", stats.success_rate).green()
    ));
    out.push_str(&format!(
        "Min Response: {}\n",
        fmt_ms(stats.min_latency_ms).cyan()
    ));
    out.push_str(&format!(
        "Max Response: {}\n",
        fmt_ms(stats.max_latency_ms).magenta()
    ));
    out.push_str(&format!(
        "Avg Response: {}\n",
        fmt_avg(stats.avg_latency_ms).blue()
    ));
    out
}

fn summary_block(url: &str, stats: &StatsView) -> String {
    let elapsed = Utc::now()
        .signed_duration_since(stats.started_at)
        .num_seconds()
        .max(0);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{}\n", "Stopping website monitoring...".yellow()));
    out.push('\n');
    out.push_str(&format!("{}\n", "=== Monitoring Summary ===".cyan().bold()));
    out.push_str(&format!("URL: {}\n", url));
    out.push_str(&format!("Duration: {}\n", format_duration(elapsed)));
    out.push_str(&format!("Total Checks: {}\n", stats.total_checks));
    out.push_str(&format!("Successful: {}\n", stats.success_checks));
    out.push_str(&format!("Failed: {}\n", stats.failure_checks));

    if stats.total_checks > 0 {
        out.push_str(&format!("Success Rate: {:.1}%\n", stats.success_rate));
        out.push_str(&format!("Min Response: {}\n", fmt_ms(stats.min_latency_ms)));
        out.push_str(&format!("Max Response: {}\n", fmt_ms(stats.max_latency_ms)));
        out.push_str(&format!("Avg Response: {}\n", fmt_avg(stats.avg_latency_ms)));
    }
    out
}

fn format_duration(total_secs: i64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(total: u64, success: u64) -> StatsView {
        StatsView {
            started_at: Utc::now(),
            total_checks: total,
            success_checks: success,
            failure_checks: total - success,
            success_rate: if total > 0 {
                success as f64 / total as f64 * 100.0
            } else {
                0.0
            },
            min_latency_ms: Some(50.0),
            max_latency_ms: Some(120.0),
            avg_latency_ms: Some(86.7),
            latency_samples: success,
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0h 0m 0s");
        assert_eq!(format_duration(61), "0h 1m 1s");
        assert_eq!(format_duration(3661), "1h 1m 1s");
    }

    #[test]
    fn test_status_line_success() {
        let line = status_line(&Outcome::now(OutcomeKind::Success {
            status: 200,
            latency_ms: 42.0,
        }));
        assert!(line.contains("Online (HTTP 200)"));
        assert!(line.contains("42 ms"));
    }

    #[test]
    fn test_status_line_failures_have_no_latency() {
        let line = status_line(&Outcome::now(OutcomeKind::Timeout));
        assert!(line.contains("Timeout"));
        assert!(!line.contains("ms"));

        let line = status_line(&Outcome::now(OutcomeKind::ConnectionFailure {
            detail: "connection refused".into(),
        }));
        assert!(line.contains("Connection Failed (connection refused)"));
    }

    #[test]
    fn test_stats_block_empty_session() {
        let block = stats_block(&view(0, 0));
        assert!(block.contains("No data collected yet"));
        assert!(!block.contains("Success Rate"));
    }

    #[test]
    fn test_stats_block_na_when_all_failed() {
        let mut v = view(3, 0);
        v.min_latency_ms = None;
        v.max_latency_ms = None;
        v.avg_latency_ms = None;
        v.latency_samples = 0;

        let block = stats_block(&v);
        assert!(block.contains("Checks: 3"));
        assert!(block.contains("N/A"));
    }

    #[test]
    fn test_summary_block_contents() {
        let block = summary_block("http://example.com/", &view(4, 2));
        assert!(block.contains("=== Monitoring Summary ==="));
        assert!(block.contains("URL: http://example.com/"));
        assert!(block.contains("Total Checks: 4"));
        assert!(block.contains("Successful: 2"));
        assert!(block.contains("Failed: 2"));
        assert!(block.contains("Success Rate: 50.0%"));
    }

    #[test]
    fn test_summary_block_zero_checks() {
        let block = summary_block("http://example.com/", &view(0, 0));
        assert!(block.contains("Total Checks: 0"));
        assert!(!block.contains("Success Rate"));
    }
}
