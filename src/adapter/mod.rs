//! Concrete implementations of the ports.
//!
//! Reporter variants for the three operational modes (human console via
//! `tracing`, machine-readable JSON lines, silent) and a minimal in-memory
//! [`HandleResolver`](crate::port::HandleResolver) for hosts without a
//! container of their own.

mod registry;
mod reporter;

pub use registry::HandleMap;
pub use reporter::{JsonLinesReporter, NoopReporter, TracingReporter};
