use std::io::Write;

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::port::{ShutdownEvent, ShutdownReporter};

/// Console variant: forwards each event through `tracing` with structured
/// fields, so hosts see shutdown progress in their normal log stream.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl ShutdownReporter for TracingReporter {
    fn emit(&self, event: &ShutdownEvent) {
        match event {
            ShutdownEvent::Start {
                connection_count, ..
            } => {
                info!(connections = connection_count, "shutdown started");
            }
            ShutdownEvent::Complete {
                total_connections,
                success_count,
                failure_count,
                duration_ms,
                ..
            } => {
                info!(
                    total = total_connections,
                    succeeded = success_count,
                    failed = failure_count,
                    duration_ms,
                    "shutdown complete"
                );
            }
            ShutdownEvent::Timeout { timeout_ms, .. } => {
                warn!(timeout_ms, "shutdown abandoned at outer deadline");
            }
            ShutdownEvent::Closed {
                token, duration_ms, ..
            } => {
                info!(token = %token, duration_ms, "connection closed");
            }
            ShutdownEvent::CloseFailed { token, error, .. } => {
                warn!(token = %token, error = %error, "connection close failed");
            }
        }
    }
}

/// Structured-JSON variant: one serialized event per line on the sink.
pub struct JsonLinesReporter {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl JsonLinesReporter {
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Report to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }
}

impl ShutdownReporter for JsonLinesReporter {
    fn emit(&self, event: &ShutdownEvent) {
        // A broken sink must not fail the pass.
        if let Ok(line) = serde_json::to_string(event) {
            let mut sink = self.sink.lock();
            let _ = writeln!(sink, "{line}");
            let _ = sink.flush();
        }
    }
}

/// Silent variant for hosts that do their own reporting.
#[derive(Debug, Default)]
pub struct NoopReporter;

impl ShutdownReporter for NoopReporter {
    fn emit(&self, _event: &ShutdownEvent) {}
}
