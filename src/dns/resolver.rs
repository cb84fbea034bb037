//! Host resolution backends.
//!
//! The prober only depends on the [`Resolve`] trait, so the system resolver
//! can be swapped for a deterministic one in tests.

#![allow(clippy::missing_errors_doc)]

use crate::error::Result;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::net::IpAddr;
use std::time::Duration;
use trust_dns_resolver::system_conf::read_system_conf;
use trust_dns_resolver::TokioAsyncResolver;

/// Slack added to the resolver's own query timeout so the prober's deadline
/// always fires first.
const RESOLVER_TIMEOUT_MARGIN: Duration = Duration::from_secs(1);

/// Something that can turn a hostname into addresses.
pub trait Resolve: Send + Sync {
    /// Resolve `host` to its IP addresses.
    fn lookup_host<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Vec<IpAddr>>>;
}

/// Resolver backed by the host's DNS configuration (`/etc/resolv.conf` on Unix).
///
/// # Example
///
/// ```ignore
/// let resolver = SystemResolver::new(Duration::from_secs(10))?;
/// let ips = resolver.lookup_host("github.com").await?;
/// ```
pub struct SystemResolver {
    inner: TokioAsyncResolver,
}

impl SystemResolver {
    /// Create a resolver from the system configuration.
    ///
    /// The answer cache is disabled so that every lookup goes to the
    /// nameserver. The resolver's own per-query timeout sits just above
    /// `timeout` and retries are turned off, leaving the prober's deadline
    /// as the one that decides whether a lookup timed out.
    pub fn new(timeout: Duration) -> Result<Self> {
        let (config, mut opts) = read_system_conf()?;
        opts.cache_size = 0;
        opts.timeout = query_timeout(timeout);
        opts.attempts = 1;

        let inner = TokioAsyncResolver::tokio(config, opts)?;
        tracing::debug!("System resolver ready (timeout {:?})", timeout);
        Ok(Self { inner })
    }
}

impl Resolve for SystemResolver {
    fn lookup_host<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Vec<IpAddr>>> {
        async move {
            let lookup = self.inner.lookup_ip(host).await?;
            Ok(lookup.iter().collect())
        }
        .boxed()
    }
}

/// Per-query timeout handed to trust-dns for a probe deadline of `timeout`.
fn query_timeout(timeout: Duration) -> Duration {
    timeout + RESOLVER_TIMEOUT_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_timeout_outlasts_deadline() {
        let deadline = Duration::from_secs(10);
        assert!(query_timeout(deadline) > deadline);
    }

    #[tokio::test]
    async fn test_resolve_public_name() {
        // Needs a readable resolv.conf and a reachable nameserver
        if std::env::var("CI").is_ok() {
            return;
        }

        let Ok(resolver) = SystemResolver::new(Duration::from_secs(5)) else {
            return;
        };
        if let Ok(ips) = resolver.lookup_host("github.com").await {
            assert!(!ips.is_empty());
        }
    }
}
