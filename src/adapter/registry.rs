use std::sync::Arc;

use crate::domain::ResourceToken;
use crate::error::BoxError;
use crate::port::{HandleResolver, ManagedHandle};

/// Minimal in-memory resolver for hosts without a DI container.
///
/// Keeps registration order, which doubles as the token order of a pass
/// when callers use [`HandleMap::tokens`].
#[derive(Default)]
pub struct HandleMap {
    entries: Vec<(ResourceToken, Arc<dyn ManagedHandle>)>,
}

impl HandleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle under a token, builder style.
    #[must_use]
    pub fn with(
        mut self,
        token: impl Into<ResourceToken>,
        handle: Arc<dyn ManagedHandle>,
    ) -> Self {
        self.insert(token, handle);
        self
    }

    pub fn insert(&mut self, token: impl Into<ResourceToken>, handle: Arc<dyn ManagedHandle>) {
        self.entries.push((token.into(), handle));
    }

    /// All registered tokens, in registration order.
    pub fn tokens(&self) -> Vec<ResourceToken> {
        self.entries.iter().map(|(token, _)| token.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HandleResolver for HandleMap {
    fn resolve(&self, token: &ResourceToken) -> Result<Arc<dyn ManagedHandle>, BoxError> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == token)
            .map(|(_, handle)| Arc::clone(handle))
            .ok_or_else(|| format!("no handle registered for token {token}").into())
    }
}
