use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::{ResourceToken, ShutdownSummary};
use crate::error::CloseError;

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One lifecycle record for a shutdown pass.
///
/// Serializes to a flat JSON object with an `event` discriminator and an
/// ISO-8601 `timestamp`, matching the operational log schema consumed by
/// downstream tooling. Field names are camelCase on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum ShutdownEvent {
    #[serde(rename = "shutdown.start", rename_all = "camelCase")]
    Start {
        timestamp: String,
        connection_count: usize,
    },

    #[serde(rename = "shutdown.complete", rename_all = "camelCase")]
    Complete {
        timestamp: String,
        total_connections: usize,
        success_count: usize,
        failure_count: usize,
        duration_ms: u64,
    },

    #[serde(rename = "shutdown.timeout", rename_all = "camelCase")]
    Timeout { timestamp: String, timeout_ms: u64 },

    #[serde(rename = "connection.closed", rename_all = "camelCase")]
    Closed {
        timestamp: String,
        token: ResourceToken,
        duration_ms: u64,
    },

    #[serde(rename = "connection.close.failed", rename_all = "camelCase")]
    CloseFailed {
        timestamp: String,
        token: ResourceToken,
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        stack: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<u64>,
    },
}

impl ShutdownEvent {
    pub fn start(connection_count: usize) -> Self {
        Self::Start {
            timestamp: now_iso(),
            connection_count,
        }
    }

    pub fn complete(summary: &ShutdownSummary) -> Self {
        Self::Complete {
            timestamp: now_iso(),
            total_connections: summary.total_connections,
            success_count: summary.success_count,
            failure_count: summary.failure_count,
            duration_ms: summary.duration_ms,
        }
    }

    pub fn timeout(timeout_ms: u64) -> Self {
        Self::Timeout {
            timestamp: now_iso(),
            timeout_ms,
        }
    }

    pub fn closed(token: &ResourceToken, duration_ms: u64) -> Self {
        Self::Closed {
            timestamp: now_iso(),
            token: token.clone(),
            duration_ms,
        }
    }

    pub fn close_failed(token: &ResourceToken, error: &CloseError, duration: Option<u64>) -> Self {
        Self::CloseFailed {
            timestamp: now_iso(),
            token: token.clone(),
            error: error.message(),
            stack: error.stack().map(str::to_owned),
            duration,
        }
    }

    /// The wire name of this event kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start { .. } => "shutdown.start",
            Self::Complete { .. } => "shutdown.complete",
            Self::Timeout { .. } => "shutdown.timeout",
            Self::Closed { .. } => "connection.closed",
            Self::CloseFailed { .. } => "connection.close.failed",
        }
    }
}

/// Injected sink for lifecycle events.
///
/// Emission is synchronous and unbuffered; each event reaches the
/// underlying sink before `emit` returns. Implementations must never
/// fail the pass, whatever happens to the sink.
pub trait ShutdownReporter: Send + Sync {
    fn emit(&self, event: &ShutdownEvent);
}
