//! Top-level probe loop.
//!
//! Wires the prober and the aggregator together: a fixed ticker drives probe
//! rounds, the aggregator runs alongside as its own task, and a single
//! cancellation token stops both.

use crate::config::MonitorConfig;
use crate::dns::{Prober, Resolve};
use crate::error::Result;
use crate::stats::{Aggregator, ReportSink, Stats};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Probe `config.hosts` every `config.probe_interval` until `cancel` fires.
///
/// Each round blocks the loop until every lookup in it has finished or timed
/// out. Reports go to `sink`. Returns the aggregator's final counters.
///
/// # Errors
///
/// Returns an error if `config` is invalid or the aggregator task panicked.
pub async fn run<S>(
    config: MonitorConfig,
    resolver: Arc<dyn Resolve>,
    sink: S,
    cancel: CancellationToken,
) -> Result<Stats>
where
    S: ReportSink + 'static,
{
    config.validate()?;

    let (results_tx, results_rx) = mpsc::channel(config.hosts.len());
    let aggregator = Aggregator::new(
        results_rx,
        sink,
        config.report_interval,
        config.lookup_timeout,
    );
    let aggregator = tokio::spawn(aggregator.run(cancel.clone()));

    let prober = Prober::new(resolver, config.hosts, config.lookup_timeout);
    tracing::info!(
        "Probing {} hosts every {:?} (timeout {:?}, report every {:?})",
        prober.hosts().len(),
        config.probe_interval,
        config.lookup_timeout,
        config.report_interval
    );

    let mut ticker =
        tokio::time::interval_at(Instant::now() + config.probe_interval, config.probe_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut rounds: u64 = 0;
    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,
            _ = ticker.tick() => {
                rounds += 1;
                tracing::debug!("Starting probe round {rounds}");
                prober.probe_round(&cancel, &results_tx).await;
            }
        }
    }

    drop(results_tx);
    let stats = aggregator.await?;
    tracing::info!(
        "Stopped after {rounds} rounds: {} calls, {} timeouts",
        stats.calls,
        stats.timeouts
    );
    Ok(stats)
}

/// Cancel `cancel` on the first interrupt signal.
///
/// # Errors
///
/// Returns an error if the signal handler cannot be installed. The token is
/// cancelled in that case too, so the monitor never runs without a way to
/// stop it.
pub async fn shutdown_on_ctrl_c(cancel: CancellationToken) -> Result<()> {
    cancel_on(tokio::signal::ctrl_c(), cancel).await
}

async fn cancel_on<F>(signal: F, cancel: CancellationToken) -> Result<()>
where
    F: Future<Output = std::io::Result<()>>,
{
    let outcome = signal.await;
    match &outcome {
        Ok(()) => tracing::info!("Interrupt received, shutting down"),
        Err(e) => tracing::error!("Cannot listen for interrupt, shutting down: {e}"),
    }
    cancel.cancel();
    Ok(outcome?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::stub::StubResolver;
    use crate::error::Error;
    use crate::stats::Report;
    use std::time::Duration;

    fn config(hosts: &[&str]) -> MonitorConfig {
        MonitorConfig {
            hosts: hosts.iter().map(|h| (*h).to_string()).collect(),
            lookup_timeout: Duration::from_secs(3),
            probe_interval: Duration::from_secs(10),
            report_interval: Duration::from_secs(15),
        }
    }

    fn cancel_after(cancel: &CancellationToken, after: Duration) {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            cancel.cancel();
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_equal_hosts_times_rounds() {
        let hosts = ["a.example", "b.example", "c.example", "d.example"];
        let cfg = MonitorConfig {
            report_interval: Duration::from_secs(60),
            ..config(&hosts)
        };
        let (sink, mut reports) = mpsc::unbounded_channel::<Report>();
        let cancel = CancellationToken::new();
        cancel_after(&cancel, Duration::from_secs(25));

        let stats = run(cfg, Arc::new(StubResolver::new()), sink, cancel)
            .await
            .unwrap();

        // Rounds at 10s and 20s.
        assert_eq!(stats.calls, 2 * hosts.len() as u64);
        assert_eq!(stats.timeouts, 0);
        assert!(reports.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_hanging_host_after_one_round() {
        let hosts = ["a.example", "slow.example", "c.example"];
        let resolver = Arc::new(StubResolver::new().hang("slow.example"));
        let (sink, mut reports) = mpsc::unbounded_channel::<Report>();
        let cancel = CancellationToken::new();

        let task = tokio::spawn(run(config(&hosts), resolver, sink, cancel.clone()));

        // Round at 10s finishes at 13s; first report at 15s.
        let report = reports.recv().await.unwrap();
        assert_eq!(report.calls, 3);
        assert_eq!(report.timeouts, 1);
        assert_eq!(report.buckets.below_50ms, 2);
        assert_eq!(report.buckets.total(), 2);

        cancel.cancel();
        task.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_round_returns_promptly() {
        let hosts = ["a.example", "slow.example"];
        let cfg = MonitorConfig {
            lookup_timeout: Duration::from_secs(10),
            report_interval: Duration::from_secs(30),
            ..config(&hosts)
        };
        let resolver = Arc::new(StubResolver::new().hang("slow.example"));
        let (sink, mut reports) = mpsc::unbounded_channel::<Report>();
        let cancel = CancellationToken::new();
        let started = Instant::now();
        cancel_after(&cancel, Duration::from_secs(12));

        let stats = run(cfg, resolver, sink, cancel).await.unwrap();

        assert!(started.elapsed() < Duration::from_secs(20));
        assert!(stats.calls <= 2);
        assert!(reports.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_signal_cancels_token() {
        let cancel = CancellationToken::new();
        let result = cancel_on(futures::future::ready(Ok(())), cancel.clone()).await;

        assert!(result.is_ok());
        assert!(cancel.is_cancelled());
    }

    #[tokio::test]
    async fn test_failed_signal_handler_still_cancels() {
        let cancel = CancellationToken::new();
        let failed = std::io::Error::new(std::io::ErrorKind::Other, "no signal support");
        let result = cancel_on(futures::future::ready(Err(failed)), cancel.clone()).await;

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(cancel.is_cancelled());
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let (sink, _reports) = mpsc::unbounded_channel::<Report>();
        let result = run(
            config(&[]),
            Arc::new(StubResolver::new()),
            sink,
            CancellationToken::new(),
        )
        .await;

        assert!(matches!(result, Err(Error::Config(_))));
    }
}
