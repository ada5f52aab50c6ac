use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ResourceToken;
use crate::error::BoxError;

/// The close capability of one live, externally managed connection.
///
/// The trait bound is the capability check: anything satisfying it is a
/// valid handle, anything else cannot reach the runtime at all. Handles
/// are looked up, used for exactly one close, and discarded; the runtime
/// never constructs or destroys them.
#[async_trait]
pub trait ManagedHandle: Send + Sync {
    /// Close the underlying connection. `force` mirrors the driver's
    /// force-close flag and is passed through untouched.
    async fn close(&self, force: bool) -> Result<(), BoxError>;
}

/// Token-to-handle lookup, implemented by the host container.
///
/// Called at most once per token per pass. A failed lookup is terminal for
/// that token (reported as an invalid handle, no retry) but invisible to
/// every other token in the pass.
pub trait HandleResolver: Send + Sync {
    fn resolve(&self, token: &ResourceToken) -> Result<Arc<dyn ManagedHandle>, BoxError>;
}
