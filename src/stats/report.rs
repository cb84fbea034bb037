//! Console report rendering.

use crate::stats::bucket::BucketCounts;
use chrono::{DateTime, Local};
use std::fmt::{self, Write as _};
use std::time::Duration;
use tokio::sync::mpsc;

/// Point-in-time copy of the aggregate counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// When the snapshot was taken
    pub at: DateTime<Local>,
    /// Cumulative lookups
    pub calls: u64,
    /// Per-lookup timeout the probe runs with
    pub lookup_timeout: Duration,
    /// Cumulative timed-out lookups
    pub timeouts: u64,
    /// Cumulative latency histogram
    pub buckets: BucketCounts,
    /// Fastest lookup so far (zero before the first one)
    pub min: Duration,
    /// Slowest lookup so far (zero before the first one)
    pub max: Duration,
}

impl Report {
    /// True when both reports carry the same counters, ignoring the timestamp.
    #[cfg(test)]
    #[must_use]
    pub fn same_counters(&self, other: &Self) -> bool {
        self.calls == other.calls
            && self.timeouts == other.timeouts
            && self.buckets == other.buckets
            && self.min == other.min
            && self.max == other.max
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "REPORT at {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.9f %z")
        )?;
        writeln!(
            f,
            "REPORT: calls: '{}'; timeouts (at {}): '{}'",
            self.calls,
            format_duration(self.lookup_timeout),
            self.timeouts
        )?;
        writeln!(
            f,
            "REPORT: below 50ms: '{}'; below 500ms: '{}', below 1s: '{}'; above 1s: '{}'; above 5s: '{}'",
            self.buckets.below_50ms,
            self.buckets.below_500ms,
            self.buckets.below_1s,
            self.buckets.above_1s,
            self.buckets.above_5s
        )?;
        write!(
            f,
            "REPORT: latency min: '{}'; latency max: '{}'",
            format_duration(self.min),
            format_duration(self.max)
        )
    }
}

/// Render a duration the way Go's `time.Duration` prints itself:
/// `0s`, `850ns`, `12.5µs`, `1.234ms`, `1.2s`, `1m30s`, `1h0m0s`.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{nanos}ns");
    }
    if nanos < 1_000_000 {
        return with_fraction(nanos, 1_000, 3, "µs");
    }
    if nanos < 1_000_000_000 {
        return with_fraction(nanos, 1_000_000, 6, "ms");
    }

    let secs = d.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    let rest = u128::from(secs % 60) * 1_000_000_000 + u128::from(d.subsec_nanos());
    out.push_str(&with_fraction(rest, 1_000_000_000, 9, "s"));
    out
}

fn with_fraction(value: u128, unit: u128, digits: usize, suffix: &str) -> String {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return format!("{whole}{suffix}");
    }
    let frac = format!("{frac:0digits$}");
    format!("{whole}.{}{suffix}", frac.trim_end_matches('0'))
}

/// Destination for periodic reports.
pub trait ReportSink: Send {
    /// Deliver one report.
    fn emit(&mut self, report: &Report);
}

/// Prints reports to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn emit(&mut self, report: &Report) {
        println!("{report}");
    }
}

/// Forwards reports to whoever holds the receiver.
impl ReportSink for mpsc::UnboundedSender<Report> {
    fn emit(&mut self, report: &Report) {
        if self.send(report.clone()).is_err() {
            tracing::debug!("Report receiver dropped");
        }
    }
}
