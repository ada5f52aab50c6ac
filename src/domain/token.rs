use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Serialize, Serializer};

static NEXT_UNIQUE: AtomicU64 = AtomicU64::new(0);

/// Opaque identifier naming one managed connection for one shutdown pass.
///
/// Tokens are supplied by the caller, never minted by the orchestrator
/// (except [`ResourceToken::unique`], which hosts use when a connection has
/// no natural name). Identity is preserved unchanged all the way into the
/// per-connection result and the emitted events.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceToken {
    /// A caller-chosen name, typically the connection's registration key.
    Name(Arc<str>),
    /// A process-unique anonymous id, never reused within the process.
    Unique(u64),
}

impl ResourceToken {
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Name(name.into())
    }

    /// Mint a fresh anonymous token. Each call returns a distinct identity.
    pub fn unique() -> Self {
        Self::Unique(NEXT_UNIQUE.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ResourceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Unique(id) => write!(f, "#{id}"),
        }
    }
}

impl From<&str> for ResourceToken {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for ResourceToken {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

// Serializes untagged (plain string or number) so event records carry the
// token as the caller knows it, not wrapped in an enum envelope.
impl Serialize for ResourceToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Name(name) => serializer.serialize_str(name),
            Self::Unique(id) => serializer.serialize_u64(*id),
        }
    }
}
