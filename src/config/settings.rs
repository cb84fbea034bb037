//! Compile-time monitor settings.

use crate::error::{Error, Result};
use std::time::Duration;

/// Hostnames resolved on every probe round, in probing order.
pub const HOSTS: &[&str] = &[
    "google.de",
    "google.com",
    "facebook.com",
    "twitter.com",
    "github.com",
    "microsoft.com",
    "akamai.com",
    "apple.com",
    "reddit.com",
    "wired.com",
    "mozilla.org",
    "kernel.org",
    "coredns.io",
    "kubernetes.io",
    "docker.com",
    "cockroachlabs.com",
    "news.ycombinator.com",
    "holidaycheck.com",
    "holidaycheck.de",
    "holidaycheck.at",
    "holidaycheck.ch",
    "iocrunch.com",
];

/// Upper bound for a single host lookup.
pub const DNS_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Time between two probe rounds.
pub const PROBE_INTERVAL: Duration = Duration::from_secs(10);

/// Time between two console reports.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(30);

/// Runtime view of the monitor settings.
///
/// The binary always uses [`MonitorConfig::default`], which is built from the
/// constants above. Library users and tests may construct their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Hostnames to resolve each round
    pub hosts: Vec<String>,
    /// Per-lookup timeout
    pub lookup_timeout: Duration,
    /// Interval between probe rounds
    pub probe_interval: Duration,
    /// Interval between reports
    pub report_interval: Duration,
}

impl MonitorConfig {
    /// Check that the settings can drive a monitor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the host list is empty or any interval
    /// is zero (a zero period would panic inside `tokio::time::interval`).
    pub fn validate(&self) -> Result<()> {
        if self.hosts.is_empty() {
            return Err(Error::config("host list is empty"));
        }
        if self.lookup_timeout.is_zero() {
            return Err(Error::config("lookup timeout must be non-zero"));
        }
        if self.probe_interval.is_zero() {
            return Err(Error::config("probe interval must be non-zero"));
        }
        if self.report_interval.is_zero() {
            return Err(Error::config("report interval must be non-zero"));
        }
        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            hosts: HOSTS.iter().map(|h| (*h).to_string()).collect(),
            lookup_timeout: DNS_CALL_TIMEOUT,
            probe_interval: PROBE_INTERVAL,
            report_interval: REPORT_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MonitorConfig::default();
        assert_eq!(config.hosts.len(), 22);
        assert_eq!(config.hosts[0], "google.de");
        assert_eq!(config.hosts[21], "iocrunch.com");
        assert_eq!(config.lookup_timeout, Duration::from_secs(10));
        assert_eq!(config.probe_interval, Duration::from_secs(10));
        assert_eq!(config.report_interval, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_hosts() {
        let config = MonitorConfig {
            hosts: vec![],
            ..MonitorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_zero_intervals() {
        let config = MonitorConfig {
            report_interval: Duration::ZERO,
            ..MonitorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MonitorConfig {
            lookup_timeout: Duration::ZERO,
            ..MonitorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
