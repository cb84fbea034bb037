//! The aggregator task.
//!
//! Single owner of the cumulative [`Stats`]. It drains the measurement
//! stream, prints a report on a fixed schedule, and stops when the shared
//! cancellation token fires.

use crate::dns::types::Measurement;
use crate::stats::counters::Stats;
use crate::stats::report::ReportSink;
use chrono::Local;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Consumes measurements and emits periodic reports.
///
/// # Example
///
/// ```ignore
/// let aggregator = Aggregator::new(results_rx, ConsoleSink, REPORT_INTERVAL, DNS_CALL_TIMEOUT);
/// let handle = tokio::spawn(aggregator.run(cancel.clone()));
/// ```
pub struct Aggregator<S> {
    results: mpsc::Receiver<Measurement>,
    sink: S,
    report_interval: Duration,
    lookup_timeout: Duration,
    stats: Stats,
}

impl<S: ReportSink> Aggregator<S> {
    /// Create an aggregator with empty counters.
    ///
    /// `lookup_timeout` is only echoed in reports.
    pub fn new(
        results: mpsc::Receiver<Measurement>,
        sink: S,
        report_interval: Duration,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            results,
            sink,
            report_interval,
            lookup_timeout,
            stats: Stats::new(),
        }
    }

    /// Run until `cancel` fires and hand back the final counters.
    ///
    /// The first report is due one interval after start. Cancellation does
    /// not produce a closing report. A closed result stream does not end
    /// the loop either; reports keep coming until cancellation.
    pub async fn run(mut self, cancel: CancellationToken) -> Stats {
        let mut ticker =
            tokio::time::interval_at(Instant::now() + self.report_interval, self.report_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                () = cancel.cancelled() => {
                    tracing::debug!(
                        "Aggregator stopping after {} calls ({} timeouts)",
                        self.stats.calls,
                        self.stats.timeouts
                    );
                    break;
                }
                Some(measurement) = self.results.recv() => {
                    self.stats.record(&measurement);
                }
                _ = ticker.tick() => {
                    let report = self.stats.snapshot(Local::now(), self.lookup_timeout);
                    self.sink.emit(&report);
                }
            }
        }

        self.stats
    }
}
