use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::config::ShutdownConfig;
use crate::domain::{CloseResult, ResourceToken, ShutdownSummary};
use crate::port::{HandleResolver, ShutdownEvent, ShutdownReporter};
use crate::runtime::closer::close_resource;
use crate::runtime::deadline::with_deadline;

/// Top-level coordinator for one shutdown pass.
///
/// Fans [`close_resource`](crate::runtime::close_resource) out over every
/// token concurrently, aggregates the results in input order, and guards
/// the whole batch with a defensive outer deadline. Its public contract
/// always returns a [`ShutdownSummary`]; it has no failure mode of its own.
pub struct ShutdownOrchestrator {
    reporter: Arc<dyn ShutdownReporter>,
}

impl ShutdownOrchestrator {
    pub fn new(reporter: Arc<dyn ShutdownReporter>) -> Self {
        Self { reporter }
    }

    /// Run one pass over `tokens`.
    ///
    /// An empty token list is an idempotent no-op: a zero summary, no
    /// events. Otherwise every token gets exactly one [`CloseResult`],
    /// and `success_count + failure_count == total_connections` holds
    /// even when the outer deadline forces the conservative all-failed
    /// summary.
    pub async fn run(
        &self,
        tokens: &[ResourceToken],
        resolver: &dyn HandleResolver,
        config: &ShutdownConfig,
    ) -> ShutdownSummary {
        if tokens.is_empty() {
            return ShutdownSummary::default();
        }

        let started = Instant::now();
        self.reporter.emit(&ShutdownEvent::start(tokens.len()));
        info!(connections = tokens.len(), timeout_ms = config.timeout_ms, "shutdown pass started");

        // Each closer is individually time-bounded; the outer deadline only
        // covers a stalled aggregation step.
        let batch = self.close_all(tokens, resolver, config);
        self.guard_batch(tokens.len(), started, config.timeout_ms, batch)
            .await
    }

    /// Race the batch against the outer deadline and settle the pass either
    /// way: aggregated results on completion, the conservative all-failed
    /// summary plus a `shutdown.timeout` event on expiry.
    async fn guard_batch(
        &self,
        total: usize,
        started: Instant,
        timeout_ms: u64,
        batch: impl Future<Output = Vec<CloseResult>>,
    ) -> ShutdownSummary {
        match with_deadline("shutdown batch", Duration::from_millis(timeout_ms), batch).await {
            Ok(results) => {
                let summary =
                    ShutdownSummary::from_results(&results, started.elapsed().as_millis() as u64);
                self.reporter.emit(&ShutdownEvent::complete(&summary));
                info!(
                    total = summary.total_connections,
                    succeeded = summary.success_count,
                    failed = summary.failure_count,
                    duration_ms = summary.duration_ms,
                    "shutdown pass complete"
                );
                summary
            }
            Err(_) => {
                self.reporter.emit(&ShutdownEvent::timeout(timeout_ms));
                warn!(timeout_ms, "shutdown batch abandoned at outer deadline");
                ShutdownSummary::all_failed(total, started.elapsed().as_millis() as u64)
            }
        }
    }

    /// Concurrent fan-out; the result vector is in token order regardless
    /// of completion order.
    async fn close_all(
        &self,
        tokens: &[ResourceToken],
        resolver: &dyn HandleResolver,
        config: &ShutdownConfig,
    ) -> Vec<CloseResult> {
        let closers = tokens
            .iter()
            .map(|token| close_resource(token, resolver, config, self.reporter.as_ref()));
        join_all(closers).await
    }
}
