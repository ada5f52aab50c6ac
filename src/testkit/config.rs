//! Canonical test configurations.
//!
//! Single source of truth for the config used across tests. Avoids each
//! test module defining its own slightly-different defaults.

use crate::config::ShutdownConfig;

/// Small per-connection deadline, standard attempt budget.
///
/// Under paused time nothing actually waits, but the deadline still has to
/// leave room for the full backoff schedule (50 + 100 = 150ms) so retry
/// tests exercise exhaustion rather than the timeout.
pub fn fast() -> ShutdownConfig {
    ShutdownConfig {
        timeout_ms: 1_000,
        retry_attempts: 3,
        force_close: false,
    }
}

/// A deadline tighter than a single backoff step, for timeout-path tests.
pub fn tight() -> ShutdownConfig {
    ShutdownConfig {
        timeout_ms: 30,
        retry_attempts: 3,
        force_close: false,
    }
}
