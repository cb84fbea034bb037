//! Statistics module.
//!
//! This module provides the consuming side of the monitor:
//! - Latency buckets and their counters
//! - The cumulative counters and report snapshots
//! - The aggregator task that owns them

pub mod aggregator;
pub mod bucket;
pub mod counters;
pub mod report;

pub use aggregator::Aggregator;
pub use bucket::{BucketCounts, LatencyBucket};
pub use counters::Stats;
pub use report::{format_duration, ConsoleSink, Report, ReportSink};
