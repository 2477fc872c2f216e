//! Command line argument surface.

use clap::Parser;
use std::time::Duration;

/// Console-based website monitor: checks status and latency at regular intervals
#[derive(Parser, Debug, Clone)]
#[command(name = "sitepulse")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URL to monitor (e.g. https://example.com; scheme defaults to http://)
    pub url: String,

    /// Check interval in seconds
    #[arg(short = 'i', long = "interval", default_value = "5")]
    pub interval: f64,

    /// Request timeout in seconds
    #[arg(short = 't', long = "timeout", default_value = "10")]
    pub timeout: f64,

    /// Emit one JSON object per check instead of the terminal view
    #[arg(long = "json")]
    pub json: bool,
}

impl Args {
    /// Get check interval as Duration
    pub fn interval_duration(&self) -> Duration {
        Duration::from_secs_f64(self.interval)
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs_f64(self.timeout)
    }

    /// Validate numeric arguments
    pub fn validate(&self) -> Result<(), String> {
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err("Interval must be positive".into());
        }

        if !self.timeout.is_finite() || self.timeout <= 0.0 {
            return Err("Timeout must be positive".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["sitepulse", "example.com"]);
        assert_eq!(args.url, "example.com");
        assert_eq!(args.interval, 5.0);
        assert_eq!(args.timeout, 10.0);
        assert!(!args.json);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_interval() {
        let args = Args::parse_from(["sitepulse", "example.com", "-i", "0"]);
        assert!(args.validate().is_err());

        let args = Args {
            url: "example.com".into(),
            interval: -3.0,
            timeout: 10.0,
            json: false,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_timeout() {
        let args = Args::parse_from(["sitepulse", "example.com", "-t", "0"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_duration_conversion() {
        let args = Args::parse_from(["sitepulse", "example.com", "-i", "2.5"]);
        assert_eq!(args.interval_duration(), Duration::from_millis(2500));
    }
}
