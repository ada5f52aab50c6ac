//! Drainpipe - bounded-time graceful shutdown for externally managed connections.
//!
//! This crate closes an arbitrary number of live, stateful connections within
//! a fixed time budget. Transient close failures are retried with exponential
//! backoff, one connection's failure never affects its siblings, and every
//! pass ends with a deterministic, machine-readable summary — even when an
//! individual close operation never settles.
//!
//! # Architecture
//!
//! Hexagonal layout: the runtime depends only on domain types and ports,
//! adapters plug in at the edges.
//!
//! - **`port`** - Traits the host supplies or consumes:
//!   - `ManagedHandle` - the close capability of one connection
//!   - `HandleResolver` - token-to-handle lookup (the DI container boundary)
//!   - `ShutdownReporter` - structured lifecycle event sink
//!
//! - **`runtime`** - The orchestration core:
//!   - `ShutdownOrchestrator` - concurrent fan-out with an outer deadline
//!   - `close_resource` - per-connection retry + timeout pipeline
//!   - `retry_with_backoff` / `with_deadline` - the underlying combinators
//!
//! - **`adapter`** - Reporter variants (tracing, JSON lines, no-op) and a
//!   minimal in-memory resolver.
//!
//! # Modules
//!
//! - [`config`] - Lenient option resolution into an immutable [`ShutdownConfig`]
//! - [`domain`] - Value types: tokens, per-connection results, pass summaries
//! - [`error`] - The [`CloseError`] taxonomy
//! - [`port`] - Trait definitions and the reporter event schema
//! - [`adapter`] - Concrete reporters and the `HandleMap` resolver
//! - [`runtime`] - Orchestrator, closer, retry and deadline combinators
//! - [`logging`] - Tracing subscriber setup for host binaries
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use drainpipe::adapter::NoopReporter;
//! use drainpipe::{ShutdownConfig, ShutdownOptions, ShutdownOrchestrator};
//!
//! let options = ShutdownOptions {
//!     timeout_ms: Some(5_000.0),
//!     force_close: Some(true),
//! };
//! let config = ShutdownConfig::resolve(&options);
//! let orchestrator = ShutdownOrchestrator::new(Arc::new(NoopReporter));
//! let _ = (config, orchestrator);
//! ```

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod port;
pub mod runtime;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use config::{ShutdownConfig, ShutdownOptions};
pub use domain::{CloseResult, ResourceToken, ShutdownSummary};
pub use error::{BoxError, CloseError};
pub use runtime::ShutdownOrchestrator;
