//! Concurrent DNS probing.
//!
//! One probe round resolves every configured hostname in parallel. Each
//! lookup is bounded by its own deadline and by the shared cancellation
//! token, and always yields exactly one [`Measurement`].

use crate::dns::resolver::Resolve;
use crate::dns::types::Measurement;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Runs probe rounds against a fixed host list.
///
/// # Example
///
/// ```ignore
/// let prober = Prober::new(Arc::new(SystemResolver::new(timeout)?), hosts, timeout);
/// prober.probe_round(&cancel, &results_tx).await;
/// ```
pub struct Prober {
    resolver: Arc<dyn Resolve>,
    hosts: Arc<[String]>,
    timeout: Duration,
}

impl Prober {
    /// Create a prober for `hosts`, bounding each lookup by `timeout`.
    pub fn new(resolver: Arc<dyn Resolve>, hosts: Vec<String>, timeout: Duration) -> Self {
        Self {
            resolver,
            hosts: hosts.into(),
            timeout,
        }
    }

    /// Hostnames probed on every round.
    #[must_use]
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Resolve every host concurrently and push one measurement per host
    /// into `sink`.
    ///
    /// Returns once every per-host task has finished, with the number of
    /// measurements the sink accepted. A closed sink is not an error: it
    /// only happens once the aggregator has shut down.
    pub async fn probe_round(
        &self,
        cancel: &CancellationToken,
        sink: &mpsc::Sender<Measurement>,
    ) -> usize {
        let mut handles = Vec::with_capacity(self.hosts.len());

        for host in &*self.hosts {
            let resolver = Arc::clone(&self.resolver);
            let host = host.clone();
            let cancel = cancel.clone();
            let sink = sink.clone();
            let timeout = self.timeout;

            handles.push(tokio::spawn(async move {
                let measurement = probe_host(resolver.as_ref(), &host, timeout, &cancel).await;
                if sink.send(measurement).await.is_err() {
                    tracing::debug!("Result stream closed, dropping measurement for {host}");
                    return false;
                }
                true
            }));
        }

        let mut delivered = 0;
        for joined in futures::future::join_all(handles).await {
            match joined {
                Ok(true) => delivered += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!("Probe task failed: {e}"),
            }
        }

        tracing::debug!("Probe round finished: {delivered}/{} delivered", self.hosts.len());
        delivered
    }
}

/// Resolve a single host and classify the outcome.
///
/// The lookup counts as timed out when its deadline elapses, when the
/// resolver itself reports a query timeout, or when `cancel` fires first.
/// Any other resolver error is recorded as a completed lookup
/// with the time spent until the failure.
pub async fn probe_host(
    resolver: &dyn Resolve,
    host: &str,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Measurement {
    let start = Instant::now();
    let outcome = tokio::select! {
        res = tokio::time::timeout(timeout, resolver.lookup_host(host)) => res.ok(),
        () = cancel.cancelled() => None,
    };
    let elapsed = start.elapsed();

    match outcome {
        None => {
            tracing::debug!("Lookup of {host} aborted after {elapsed:?}");
            Measurement::timed_out(host, elapsed)
        }
        Some(Err(e)) if e.is_timeout() => {
            tracing::debug!("Lookup of {host} timed out in resolver after {elapsed:?}");
            Measurement::timed_out(host, elapsed)
        }
        Some(Ok(addrs)) => {
            tracing::trace!("Resolved {host} to {} address(es) in {elapsed:?}", addrs.len());
            Measurement::completed(host, elapsed)
        }
        Some(Err(e)) => {
            // Counted like a successful lookup; only the log tells them apart.
            tracing::debug!("Lookup of {host} failed after {elapsed:?}: {e}");
            Measurement::completed(host, elapsed)
        }
    }
}
