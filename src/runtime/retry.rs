use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::error::{BoxError, CloseError};

/// Bounds for one retried operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero means the operation is
    /// never invoked at all.
    pub max_attempts: u32,
    /// Backoff before attempt `i + 1` is `base_delay * 2^i`.
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Backoff before the next attempt after `failed` failures (1-based).
    /// Saturates instead of overflowing for pathological attempt budgets.
    fn delay_after(&self, failed: u32) -> Duration {
        let factor = 2u32.saturating_pow(failed.saturating_sub(1));
        self.base_delay.saturating_mul(factor)
    }
}

/// Success or failure as data; the executor itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome<T> {
    Success { value: T, attempts: u32 },
    Failure {
        /// The last normalized error, or `None` for the degenerate
        /// zero-attempt policy where nothing ever ran.
        error: Option<CloseError>,
        attempts: u32,
    },
}

impl<T> RetryOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn attempts(&self) -> u32 {
        match self {
            Self::Success { attempts, .. } | Self::Failure { attempts, .. } => *attempts,
        }
    }
}

/// Repeat a failing operation with exponential backoff.
///
/// The factory is re-invoked for every attempt. The first success wins
/// immediately; the final failure returns without a trailing delay.
/// Whatever shape the operation fails with is normalized into a
/// [`CloseError`] before it lands in the outcome.
pub async fn retry_with_backoff<T, F, Fut>(policy: RetryPolicy, mut operation: F) -> RetryOutcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, BoxError>>,
{
    let mut attempt: u32 = 0;
    if policy.max_attempts == 0 {
        return RetryOutcome::Failure {
            error: None,
            attempts: 0,
        };
    }

    loop {
        match operation().await {
            Ok(value) => {
                return RetryOutcome::Success {
                    value,
                    attempts: attempt + 1,
                };
            }
            Err(err) => {
                let error = CloseError::normalize(&err);
                attempt += 1;
                if attempt >= policy.max_attempts {
                    return RetryOutcome::Failure {
                        error: Some(error),
                        attempts: attempt,
                    };
                }

                let delay = policy.delay_after(attempt);
                debug!(
                    attempt,
                    next_delay_ms = delay.as_millis() as u64,
                    error = %error,
                    "close attempt failed, backing off"
                );
                sleep(delay).await;
            }
        }
    }
}
