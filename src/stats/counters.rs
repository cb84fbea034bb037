//! Cumulative probe statistics.

use crate::dns::types::Measurement;
use crate::stats::bucket::{BucketCounts, LatencyBucket};
use crate::stats::report::Report;
use chrono::{DateTime, Local};
use std::time::Duration;

/// Counters accumulated since process start.
///
/// Owned by the aggregator task and never shared. Nothing is ever reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Lookups recorded, timed out or not
    pub calls: u64,
    /// Lookups aborted by deadline or cancellation
    pub timeouts: u64,
    /// Fastest non-timed-out lookup, `None` until the first one
    pub min: Option<Duration>,
    /// Slowest non-timed-out lookup, `None` until the first one
    pub max: Option<Duration>,
    /// Histogram of non-timed-out lookups
    pub buckets: BucketCounts,
}

impl Stats {
    /// Create empty counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one measurement into the counters.
    ///
    /// Timed-out lookups only bump `calls` and `timeouts`.
    pub fn record(&mut self, measurement: &Measurement) {
        self.calls += 1;
        if measurement.timed_out {
            self.timeouts += 1;
            return;
        }

        let latency = measurement.elapsed;
        self.min = Some(self.min.map_or(latency, |m| m.min(latency)));
        self.max = Some(self.max.map_or(latency, |m| m.max(latency)));
        self.buckets.increment(LatencyBucket::classify(latency));
    }

    /// Freeze the counters into a report stamped with `at`.
    #[must_use]
    pub fn snapshot(&self, at: DateTime<Local>, lookup_timeout: Duration) -> Report {
        Report {
            at,
            calls: self.calls,
            lookup_timeout,
            timeouts: self.timeouts,
            buckets: self.buckets,
            min: self.min.unwrap_or_default(),
            max: self.max.unwrap_or_default(),
        }
    }
}
