//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`handle`] — Mock [`ManagedHandle`](crate::port::ManagedHandle)
//!   implementations: `ScriptedHandle`, `NeverHandle`, `SlowHandle`.
//! - [`reporter`] — `RecordingReporter` capturing emitted events.
//! - [`config`] — Canonical test configurations.

pub mod config;
pub mod handle;
pub mod reporter;
