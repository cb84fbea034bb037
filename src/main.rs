//! dnsprobe - DNS resolution latency probe
//!
//! Binary entry point for the dnsprobe CLI application.

#![warn(clippy::all, warnings)]
#![warn(clippy::pedantic, clippy::nursery)]

use dnsprobe::config::MonitorConfig;
use dnsprobe::dns::SystemResolver;
use dnsprobe::error::Result;
use dnsprobe::monitor;
use dnsprobe::stats::ConsoleSink;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up logging. `RUST_LOG` wins over the CLI verbosity flags.
fn setup_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}

/// Main entry point for the dnsprobe CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = dnsprobe::cli::parse();
    setup_logging(cli.log_level());

    tracing::info!("dnsprobe starting...");

    let config = MonitorConfig::default();
    let resolver = Arc::new(SystemResolver::new(config.lookup_timeout)?);

    let cancel = CancellationToken::new();
    let signal = tokio::spawn(monitor::shutdown_on_ctrl_c(cancel.clone()));

    let stats = monitor::run(config, resolver, ConsoleSink, cancel).await?;
    tracing::debug!("Final counters: {stats:?}");

    // The monitor only stops once the token is cancelled, and only the
    // signal task cancels it; surface a failed handler install.
    signal.await??;

    Ok(())
}
