//! Mock [`ManagedHandle`] implementations for testing.
//!
//! - [`ScriptedHandle`] — pre-loaded close results popped per attempt.
//!   Best for: retry behavior, attempt counting, force-flag assertions.
//! - [`NeverHandle`] — a close that never settles.
//!   Best for: deadline and sibling-isolation tests.
//! - [`SlowHandle`] — settles after a fixed virtual delay.
//!   Best for: concurrency timing tests under paused time.

use std::collections::VecDeque;
use std::future;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::error::{BoxError, CloseError};
use crate::port::ManagedHandle;

// ---------------------------------------------------------------------------
// ScriptedHandle
// ---------------------------------------------------------------------------

/// A handle with scripted close results and attempt bookkeeping.
///
/// Each close pops the next result from the queue; an exhausted queue
/// defaults to `Ok(())`.
#[derive(Default)]
pub struct ScriptedHandle {
    results: Mutex<VecDeque<Result<(), CloseError>>>,
    /// Returned once the scripted queue is exhausted; `None` means succeed.
    fallback_error: Mutex<Option<CloseError>>,
    close_count: AtomicU32,
    forces: Mutex<Vec<bool>>,
}

impl ScriptedHandle {
    /// Every close succeeds.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// The first `failures` closes fail, then closes succeed.
    pub fn failing_times(failures: u32) -> Self {
        let results = (0..failures)
            .map(|i| {
                Err(CloseError::CloseFailed {
                    message: format!("transient failure {i}"),
                    stack: None,
                })
            })
            .collect();
        Self {
            results: Mutex::new(results),
            ..Self::default()
        }
    }

    /// Every close fails with `message`. The scripted queue is left empty;
    /// the fallback error repeats forever.
    pub fn always_failing(message: &str) -> Self {
        let handle = Self::default();
        *handle.fallback_error.lock().unwrap() = Some(CloseError::CloseFailed {
            message: message.to_string(),
            stack: None,
        });
        handle
    }

    pub fn with_results(results: Vec<Result<(), CloseError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            ..Self::default()
        }
    }

    pub fn close_count(&self) -> u32 {
        self.close_count.load(Ordering::SeqCst)
    }

    /// The `force` flag of every close call, in call order.
    pub fn forces(&self) -> Vec<bool> {
        self.forces.lock().unwrap().clone()
    }
}

#[async_trait]
impl ManagedHandle for ScriptedHandle {
    async fn close(&self, force: bool) -> Result<(), BoxError> {
        self.close_count.fetch_add(1, Ordering::SeqCst);
        self.forces.lock().unwrap().push(force);

        let next = self.results.lock().unwrap().pop_front();
        match next {
            Some(Ok(())) => Ok(()),
            Some(Err(err)) => Err(Box::new(err)),
            None => match self.fallback_error.lock().unwrap().clone() {
                Some(err) => Err(Box::new(err)),
                None => Ok(()),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// NeverHandle
// ---------------------------------------------------------------------------

/// A close that never settles; only a deadline gets rid of it.
pub struct NeverHandle;

#[async_trait]
impl ManagedHandle for NeverHandle {
    async fn close(&self, _force: bool) -> Result<(), BoxError> {
        future::pending().await
    }
}

// ---------------------------------------------------------------------------
// SlowHandle
// ---------------------------------------------------------------------------

/// A close that succeeds after a fixed delay.
pub struct SlowHandle {
    delay: Duration,
}

impl SlowHandle {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ManagedHandle for SlowHandle {
    async fn close(&self, _force: bool) -> Result<(), BoxError> {
        sleep(self.delay).await;
        Ok(())
    }
}
