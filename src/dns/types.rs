//! DNS probe data types.

use std::time::Duration;

/// Outcome of resolving one hostname in one probe round.
///
/// Produced by the prober, consumed exactly once by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Hostname that was resolved
    pub host: String,
    /// Wall-clock time spent on the lookup
    pub elapsed: Duration,
    /// Whether the lookup was aborted by its deadline or by cancellation
    pub timed_out: bool,
}

impl Measurement {
    /// Create a measurement for a lookup that returned (successfully or not).
    #[must_use]
    pub fn completed(host: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            host: host.into(),
            elapsed,
            timed_out: false,
        }
    }

    /// Create a measurement for a lookup that was aborted.
    #[must_use]
    pub fn timed_out(host: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            host: host.into(),
            elapsed,
            timed_out: true,
        }
    }
}
