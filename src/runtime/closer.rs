use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use crate::config::{ShutdownConfig, RETRY_BASE_DELAY_MS};
use crate::domain::{CloseResult, ResourceToken};
use crate::error::CloseError;
use crate::port::{HandleResolver, ShutdownEvent, ShutdownReporter};
use crate::runtime::deadline::with_deadline;
use crate::runtime::retry::{retry_with_backoff, RetryOutcome, RetryPolicy};

/// Close one connection: resolve, retry with backoff, bound with the
/// per-connection deadline, report the outcome.
///
/// Every code path returns a [`CloseResult`]; nothing escapes. A failed
/// lookup is terminal without retry or timeout wrapping, since there is
/// nothing asynchronous to wait on.
pub async fn close_resource(
    token: &ResourceToken,
    resolver: &dyn HandleResolver,
    config: &ShutdownConfig,
    reporter: &dyn ShutdownReporter,
) -> CloseResult {
    let started = Instant::now();

    let handle = match resolver.resolve(token) {
        Ok(handle) => handle,
        Err(err) => {
            warn!(token = %token, error = %err, "handle lookup failed");
            let error = CloseError::InvalidHandle;
            reporter.emit(&ShutdownEvent::close_failed(token, &error, Some(0)));
            return CloseResult::failed(token.clone(), 0, error);
        }
    };

    let policy = RetryPolicy::new(
        config.retry_attempts,
        Duration::from_millis(RETRY_BASE_DELAY_MS),
    );
    let force = config.force_close;
    let label = format!("close {token}");

    let raced = with_deadline(
        &label,
        Duration::from_millis(config.timeout_ms),
        retry_with_backoff(policy, || {
            let handle = Arc::clone(&handle);
            async move { handle.close(force).await }
        }),
    )
    .await;

    let duration_ms = started.elapsed().as_millis() as u64;
    match raced {
        Ok(RetryOutcome::Success { attempts, .. }) => {
            debug!(token = %token, attempts, duration_ms, "connection closed");
            reporter.emit(&ShutdownEvent::closed(token, duration_ms));
            CloseResult::succeeded(token.clone(), duration_ms)
        }
        Ok(RetryOutcome::Failure { error, attempts }) => {
            let error = error.unwrap_or(CloseError::CloseFailed {
                message: "close was never attempted".into(),
                stack: None,
            });
            warn!(token = %token, attempts, duration_ms, error = %error, "close attempts exhausted");
            reporter.emit(&ShutdownEvent::close_failed(token, &error, Some(duration_ms)));
            CloseResult::failed(token.clone(), duration_ms, error)
        }
        Err(timeout) => {
            warn!(token = %token, duration_ms, "close abandoned at deadline");
            reporter.emit(&ShutdownEvent::close_failed(token, &timeout, Some(duration_ms)));
            CloseResult::failed(token.clone(), duration_ms, timeout)
        }
    }
}
