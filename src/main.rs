//! sitepulse - Terminal Website Monitor
//!
//! Checks one endpoint at a fixed cadence and keeps a live terminal view
//! of status, latency, and session statistics.

mod cli;
mod config;
mod probe;
mod render;
mod scheduler;
mod stats;

use clap::Parser;
use colored::Colorize;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Args;
use config::Target;
use probe::HttpProber;
use render::{JsonRenderer, TerminalRenderer};
use scheduler::Monitor;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so they cannot corrupt the view on stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sitepulse=warn")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = args.validate() {
        fail(&e);
    }

    let target = match Target::from_args(&args) {
        Ok(target) => target,
        Err(e) => fail(&e.to_string()),
    };

    let prober = match HttpProber::new(&target) {
        Ok(prober) => prober,
        Err(e) => fail(&e.to_string()),
    };

    let cancel = CancellationToken::new();
    let handler = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        handler.cancel();
    });

    // Failed probes never terminate the process; only the Ctrl+C path
    // above ends the loop, and that exit is clean.
    if args.json {
        Monitor::new(target, prober, JsonRenderer, cancel).run().await;
    } else {
        let renderer = TerminalRenderer::new(&target);
        Monitor::new(target, prober, renderer, cancel).run().await;
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", format!("Error: {}", message).red());
    std::process::exit(1);
}
