//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the orchestration runtime and its external
//! collaborators. The host container implements [`HandleResolver`] and each
//! connection wrapper implements [`ManagedHandle`]; the runtime consumes
//! both and produces lifecycle events through [`ShutdownReporter`].
//!
//! # Available Ports
//!
//! - [`ManagedHandle`] - the close capability of one live connection
//! - [`HandleResolver`] - token-to-handle lookup, may fail per token
//! - [`ShutdownReporter`] - synchronous sink for [`ShutdownEvent`] records

mod handle;
mod reporter;

pub use handle::{HandleResolver, ManagedHandle};
pub use reporter::{ShutdownEvent, ShutdownReporter};
