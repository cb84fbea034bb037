//! Deterministic resolver for tests.

use crate::dns::resolver::Resolve;
use crate::error::{Error, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::net::IpAddr;
use std::time::Duration;
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};

/// Answers instantly unless told to hang or fail for specific hosts.
#[derive(Debug, Default)]
pub struct StubResolver {
    hanging: Vec<String>,
    failing: Vec<String>,
    timing_out: Vec<String>,
    delay: Duration,
}

impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never answer for `host`.
    pub fn hang(mut self, host: &str) -> Self {
        self.hanging.push(host.to_string());
        self
    }

    /// Answer NXDOMAIN-style for `host`.
    pub fn fail(mut self, host: &str) -> Self {
        self.failing.push(host.to_string());
        self
    }

    /// Report a resolver-side query timeout for `host`.
    pub fn time_out(mut self, host: &str) -> Self {
        self.timing_out.push(host.to_string());
        self
    }

    /// Wait this long before answering any host.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Resolve for StubResolver {
    fn lookup_host<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Vec<IpAddr>>> {
        async move {
            if self.hanging.iter().any(|h| h == host) {
                futures::future::pending::<()>().await;
            }
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.failing.iter().any(|h| h == host) {
                return Err(Error::Resolver(ResolveError::from("no record found")));
            }
            if self.timing_out.iter().any(|h| h == host) {
                return Err(Error::Resolver(ResolveError::from(ResolveErrorKind::Timeout)));
            }
            Ok(vec![IpAddr::from([127, 0, 0, 1])])
        }
        .boxed()
    }
}
