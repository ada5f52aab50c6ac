use thiserror::Error;

/// Arbitrary-shaped failure at the port boundary.
///
/// Handles and resolvers are external collaborators; whatever they fail
/// with is normalized into a [`CloseError`] before it reaches a result
/// or a report.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong while closing one connection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloseError {
    /// The resolver failed or returned nothing usable for the token.
    /// Never retried: there is nothing asynchronous to wait on.
    #[error("Invalid or missing wrapper")]
    InvalidHandle,

    /// A deadline expired before the guarded operation settled.
    #[error("timeout after {timeout_ms}ms: {label}")]
    Timeout { label: String, timeout_ms: u64 },

    /// The close operation itself failed, normalized to a uniform shape.
    #[error("{message}")]
    CloseFailed {
        message: String,
        stack: Option<String>,
    },
}

impl CloseError {
    /// Normalize an arbitrary boundary error into the uniform shape.
    ///
    /// A `CloseError` travelling through the boundary as a `BoxError`
    /// comes back out unchanged, so timeout and stack details survive.
    pub fn normalize(err: &BoxError) -> Self {
        if let Some(close) = err.downcast_ref::<CloseError>() {
            return close.clone();
        }
        Self::CloseFailed {
            message: err.to_string(),
            stack: None,
        }
    }

    /// The human-readable message carried into failure reports.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Stack detail, when the underlying failure carried one.
    pub fn stack(&self) -> Option<&str> {
        match self {
            Self::CloseFailed { stack, .. } => stack.as_deref(),
            _ => None,
        }
    }

    /// Whether this failure came from a deadline rather than the close itself.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
