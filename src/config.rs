//! Monitoring target configuration.
//!
//! Validated once at startup; anything invalid here is a fatal
//! configuration error, never a runtime fault.

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

use crate::cli::Args;

/// Fatal configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid URL {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },
    #[error("interval must be positive")]
    NonPositiveInterval,
    #[error("timeout must be positive")]
    NonPositiveTimeout,
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// An immutable, validated monitoring target.
#[derive(Debug, Clone)]
pub struct Target {
    pub url: Url,
    pub interval: Duration,
    pub timeout: Duration,
}

impl Target {
    /// Build a target from raw CLI input.
    ///
    /// A URL without a scheme gets `http://` prepended before parsing.
    pub fn new(raw_url: &str, interval: Duration, timeout: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::NonPositiveInterval);
        }
        if timeout.is_zero() {
            return Err(ConfigError::NonPositiveTimeout);
        }

        let url = normalize_url(raw_url)?;

        Ok(Self {
            url,
            interval,
            timeout,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        Self::new(&args.url, args.interval_duration(), args.timeout_duration())
    }
}

/// Default the scheme to `http://` when absent, then require a
/// structurally valid URL with a host.
fn normalize_url(raw: &str) -> Result<Url, ConfigError> {
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    let url = Url::parse(&candidate).map_err(|e| ConfigError::InvalidUrl {
        input: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !url.has_host() {
        return Err(ConfigError::InvalidUrl {
            input: raw.to_string(),
            reason: "no host".to_string(),
        });
    }

    Ok(url)
}
