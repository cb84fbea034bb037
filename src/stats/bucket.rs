//! Latency histogram buckets.

use std::time::Duration;

/// Lookups faster than this land in [`LatencyBucket::Below50ms`].
pub const BELOW_50MS: Duration = Duration::from_millis(50);
/// Upper bound of [`LatencyBucket::Below500ms`].
pub const BELOW_500MS: Duration = Duration::from_millis(500);
/// Upper bound of [`LatencyBucket::Below1s`].
pub const BELOW_1S: Duration = Duration::from_secs(1);
/// Lower bound of [`LatencyBucket::Above5s`].
pub const ABOVE_5S: Duration = Duration::from_secs(5);

/// One of five mutually exclusive latency ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatencyBucket {
    /// `< 50ms`
    Below50ms,
    /// `[50ms, 500ms)`
    Below500ms,
    /// `[500ms, 1s)`
    Below1s,
    /// `[1s, 5s)`
    Above1s,
    /// `>= 5s`
    Above5s,
}

impl LatencyBucket {
    /// Pick the bucket for a lookup latency.
    ///
    /// Checks run in report order, except that `>= 5s` is tested before
    /// `>= 1s`; that is what keeps the "above 1s" counter limited to
    /// `[1s, 5s)`.
    #[must_use]
    pub fn classify(latency: Duration) -> Self {
        if latency < BELOW_50MS {
            Self::Below50ms
        } else if latency < BELOW_500MS {
            Self::Below500ms
        } else if latency < BELOW_1S {
            Self::Below1s
        } else if latency >= ABOVE_5S {
            Self::Above5s
        } else {
            Self::Above1s
        }
    }
}

/// Per-bucket counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub below_50ms: u64,
    pub below_500ms: u64,
    pub below_1s: u64,
    pub above_1s: u64,
    pub above_5s: u64,
}

impl BucketCounts {
    /// Count one lookup in `bucket`.
    pub fn increment(&mut self, bucket: LatencyBucket) {
        *self.slot(bucket) += 1;
    }

    /// Current count for `bucket`.
    #[cfg(test)]
    #[must_use]
    pub fn get(&self, bucket: LatencyBucket) -> u64 {
        match bucket {
            LatencyBucket::Below50ms => self.below_50ms,
            LatencyBucket::Below500ms => self.below_500ms,
            LatencyBucket::Below1s => self.below_1s,
            LatencyBucket::Above1s => self.above_1s,
            LatencyBucket::Above5s => self.above_5s,
        }
    }

    /// Sum over all buckets.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.below_50ms + self.below_500ms + self.below_1s + self.above_1s + self.above_5s
    }

    fn slot(&mut self, bucket: LatencyBucket) -> &mut u64 {
        match bucket {
            LatencyBucket::Below50ms => &mut self.below_50ms,
            LatencyBucket::Below500ms => &mut self.below_500ms,
            LatencyBucket::Below1s => &mut self.below_1s,
            LatencyBucket::Above1s => &mut self.above_1s,
            LatencyBucket::Above5s => &mut self.above_5s,
        }
    }
}
