//! The orchestration core: one bounded-time shutdown pass.
//!
//! Built bottom-up from two combinators ([`with_deadline`],
//! [`retry_with_backoff`]), a per-connection pipeline ([`close_resource`])
//! and the top-level [`ShutdownOrchestrator`] that fans the pipeline out
//! over every token concurrently.

mod closer;
mod deadline;
mod orchestrator;
mod retry;

pub use closer::close_resource;
pub use deadline::with_deadline;
pub use orchestrator::ShutdownOrchestrator;
pub use retry::{retry_with_backoff, RetryOutcome, RetryPolicy};
