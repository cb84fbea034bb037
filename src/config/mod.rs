//! Configuration module.
//!
//! Everything the monitor needs to know is fixed at compile time. This module
//! holds those constants and the [`MonitorConfig`] value that carries them
//! into the prober and the aggregator.

pub mod settings;

pub use settings::{
    MonitorConfig, DNS_CALL_TIMEOUT, HOSTS, PROBE_INTERVAL, REPORT_INTERVAL,
};
