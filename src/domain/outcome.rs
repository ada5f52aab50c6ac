use crate::domain::ResourceToken;
use crate::error::CloseError;

/// Outcome of closing one connection. Produced exactly once per token per pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseResult {
    pub token: ResourceToken,
    pub success: bool,
    pub duration_ms: u64,
    pub error: Option<CloseError>,
}

impl CloseResult {
    pub fn succeeded(token: ResourceToken, duration_ms: u64) -> Self {
        Self {
            token,
            success: true,
            duration_ms,
            error: None,
        }
    }

    pub fn failed(token: ResourceToken, duration_ms: u64, error: CloseError) -> Self {
        Self {
            token,
            success: false,
            duration_ms,
            error: Some(error),
        }
    }
}

/// Aggregate outcome of one shutdown pass.
///
/// `success_count + failure_count == total_connections` holds on every path,
/// including the degraded all-failed summary after an outer timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShutdownSummary {
    pub total_connections: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub duration_ms: u64,
}

impl ShutdownSummary {
    /// Aggregate collected results into pass totals.
    pub fn from_results(results: &[CloseResult], duration_ms: u64) -> Self {
        let success_count = results.iter().filter(|r| r.success).count();
        Self {
            total_connections: results.len(),
            success_count,
            failure_count: results.len() - success_count,
            duration_ms,
        }
    }

    /// Conservative summary for a pass abandoned at the outer deadline:
    /// individual states are unknown, so every connection counts as failed.
    pub fn all_failed(total_connections: usize, duration_ms: u64) -> Self {
        Self {
            total_connections,
            success_count: 0,
            failure_count: total_connections,
            duration_ms,
        }
    }
}
