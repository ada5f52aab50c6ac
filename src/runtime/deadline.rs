use std::future::Future;
use std::time::Duration;

use crate::error::CloseError;

/// Race an operation against a deadline.
///
/// Resolves with the operation's output if it settles first, or with a
/// [`CloseError::Timeout`] embedding `label` and the deadline once the
/// timer wins. Losing the race drops the in-flight future, so the
/// operation is cancelled at its next suspension point rather than left
/// running in the background.
pub async fn with_deadline<F>(
    label: &str,
    deadline: Duration,
    operation: F,
) -> Result<F::Output, CloseError>
where
    F: Future,
{
    match tokio::time::timeout(deadline, operation).await {
        Ok(output) => Ok(output),
        Err(_elapsed) => Err(CloseError::Timeout {
            label: label.to_string(),
            timeout_ms: deadline.as_millis() as u64,
        }),
    }
}
