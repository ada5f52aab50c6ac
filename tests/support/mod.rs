#![allow(dead_code)]

//! Shared helpers for the integration suite.

use drainpipe::port::ShutdownEvent;
use drainpipe::{ResourceToken, ShutdownSummary};

/// Tokens for a pass, in the given order.
pub fn named_tokens(names: &[&str]) -> Vec<ResourceToken> {
    names.iter().map(|name| ResourceToken::named(*name)).collect()
}

/// The structural invariant every summary must satisfy.
pub fn assert_partition(summary: &ShutdownSummary) {
    assert_eq!(
        summary.success_count + summary.failure_count,
        summary.total_connections,
        "success + failure must equal total: {summary:?}"
    );
}

/// `(token, duration_ms)` of every `connection.closed` event, in order.
pub fn closed_events(events: &[ShutdownEvent]) -> Vec<(ResourceToken, u64)> {
    events
        .iter()
        .filter_map(|event| match event {
            ShutdownEvent::Closed {
                token, duration_ms, ..
            } => Some((token.clone(), *duration_ms)),
            _ => None,
        })
        .collect()
}

/// `(token, error, duration)` of every `connection.close.failed` event.
pub fn failed_events(events: &[ShutdownEvent]) -> Vec<(ResourceToken, String, Option<u64>)> {
    events
        .iter()
        .filter_map(|event| match event {
            ShutdownEvent::CloseFailed {
                token,
                error,
                duration,
                ..
            } => Some((token.clone(), error.clone(), *duration)),
            _ => None,
        })
        .collect()
}
