//! Error types module.
//!
//! This module defines the error types used throughout dnsprobe.
//! It uses `thiserror` for structured error handling and provides
//! a custom `Result` type alias for convenience.
//!
//! Individual probe failures are never turned into an [`Error`]; they are
//! folded into the measurement stream as statistics. Only problems that
//! prevent the monitor from starting or shutting down cleanly surface here.

use thiserror::Error;
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};

/// A specialized `Result` type for dnsprobe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for dnsprobe.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (signal handler registration, stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// DNS resolver error (resolver construction, lookup failures)
    #[error("DNS resolver error: {0}")]
    Resolver(#[from] ResolveError),

    /// Configuration error (empty host list, zero intervals)
    #[error("Config error: {0}")]
    Config(String),

    /// A background task panicked or was aborted
    #[error("Task error: {0}")]
    Task(String),
}

impl Error {
    /// Create a new configuration error with a message.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the resolver gave up because a query ran out of time.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Resolver(e) if matches!(e.kind(), ResolveErrorKind::Timeout))
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Task(e.to_string())
    }
}
