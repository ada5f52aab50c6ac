//! Shutdown configuration resolution.
//!
//! User-supplied options are treated as untrusted: a shutdown pass must
//! never fail merely because its configuration is malformed, so bad values
//! are silently replaced with defaults instead of rejected.

use serde::Deserialize;

/// Fallback per-pass deadline when no usable timeout is supplied.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Close attempts per connection. A process-wide constant, not a user
/// option - an intentional simplification of the configuration surface.
pub const RETRY_ATTEMPTS: u32 = 3;

/// Base delay for exponential retry backoff.
pub const RETRY_BASE_DELAY_MS: u64 = 50;

/// Raw, possibly-garbage user options.
///
/// `timeout_ms` is an `f64` so that NaN, infinities and negative values
/// are representable; all of them resolve to the default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShutdownOptions {
    pub timeout_ms: Option<f64>,
    pub force_close: Option<bool>,
}

/// Immutable configuration for one shutdown pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownConfig {
    /// Deadline applied per connection and, defensively, to the whole batch.
    pub timeout_ms: u64,
    /// Close attempts per connection.
    pub retry_attempts: u32,
    /// Passed through to each handle's `close`.
    pub force_close: bool,
}

impl ShutdownConfig {
    /// Resolve raw options into a validated configuration. Pure; never fails.
    #[must_use]
    pub fn resolve(options: &ShutdownOptions) -> Self {
        let timeout_ms = options
            .timeout_ms
            .filter(|ms| ms.is_finite() && *ms >= 0.0)
            .map(|ms| ms as u64)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            timeout_ms,
            retry_attempts: RETRY_ATTEMPTS,
            force_close: options.force_close.unwrap_or(false),
        }
    }
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self::resolve(&ShutdownOptions::default())
    }
}
