//! Builder registry - the set of model builders known to the host.
//!
//! Registration order is preserved: when a builder picks a peer to delegate
//! to, the first suitable registration wins.

use std::sync::Arc;

use crate::builder::trait_def::ModelBuilder;

/// Ordered set of registered model builders.
#[derive(Clone, Default)]
pub struct BuilderRegistry {
    builders: Vec<Arc<dyn ModelBuilder>>,
}

impl BuilderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builder after the existing ones.
    pub fn register(&mut self, builder: Arc<dyn ModelBuilder>) {
        self.builders.push(builder);
    }

    /// The first registered builder that is not `this` instance.
    ///
    /// Builders are compared by identity, so a distinct builder that happens
    /// to share `this`'s name is still a candidate.
    pub fn first_except(&self, this: &dyn ModelBuilder) -> Option<Arc<dyn ModelBuilder>> {
        self.builders
            .iter()
            .find(|&b| !std::ptr::addr_eq(Arc::as_ptr(b), this))
            .cloned()
    }

    /// Names of all registered builders, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.builders.iter().map(|b| b.name())
    }

    /// Get the number of registered builders.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl std::fmt::Debug for BuilderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
