//! Value types for one shutdown pass.
//!
//! Everything here is created at the start of a pass and discarded at its
//! end; nothing persists or is reused across passes.

mod outcome;
mod token;

pub use outcome::{CloseResult, ShutdownSummary};
pub use token::ResourceToken;
