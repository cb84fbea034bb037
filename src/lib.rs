//! dnsprobe - a DNS resolution latency probe.
//!
//! The crate resolves a fixed list of hostnames on a fixed schedule and
//! aggregates the lookup latencies into cumulative console reports:
//! - Every probe round resolves all hosts concurrently, each lookup bounded
//!   by its own timeout
//! - Measurements flow through a channel to a single aggregator task
//! - The aggregator prints a report every 30 seconds until interrupted
//!
//! # Library Usage
//!
//! ```ignore
//! use dnsprobe::{monitor, ConsoleSink, MonitorConfig, SystemResolver};
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! let config = MonitorConfig::default();
//! let resolver = Arc::new(SystemResolver::new(config.lookup_timeout)?);
//! let cancel = CancellationToken::new();
//! tokio::spawn(monitor::shutdown_on_ctrl_c(cancel.clone()));
//! let stats = monitor::run(config, resolver, ConsoleSink, cancel).await?;
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! dnsprobe
//! dnsprobe --verbose
//! RUST_LOG=dnsprobe=trace dnsprobe
//! ```
//!
//! # Report format
//!
//! ```text
//! REPORT at 2024-03-01 12:30:00.000000000 +0100
//! REPORT: calls: '44'; timeouts (at 10s): '2'
//! REPORT: below 50ms: '30'; below 500ms: '8', below 1s: '2'; above 1s: '1'; above 5s: '1'
//! REPORT: latency min: '3ms'; latency max: '6.5s'
//! ```

pub mod cli;
pub mod config;
pub mod dns;
pub mod error;
pub mod monitor;
pub mod stats;

// Re-export commonly used types
pub use cli::Cli;
pub use config::MonitorConfig;
pub use dns::{Measurement, Prober, Resolve, SystemResolver};
pub use error::{Error, Result};
pub use stats::{Aggregator, ConsoleSink, LatencyBucket, Report, ReportSink, Stats};
