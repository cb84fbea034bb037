//! DNS module.
//!
//! This module provides the probing side of the monitor:
//! - The measurement type produced per host and round
//! - The resolver abstraction and its system-backed implementation
//! - The prober that fans lookups out and funnels results into a channel

pub mod prober;
pub mod resolver;
pub mod types;

#[cfg(test)]
pub(crate) mod stub;

pub use prober::Prober;
pub use resolver::{Resolve, SystemResolver};
pub use types::Measurement;
