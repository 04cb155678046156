//! Typed view over the host model cache.
//!
//! Entries are stored under `(groupId, artifactId, version, "manage")`. Values
//! under other tags belong to other cache users and are never touched.

use std::sync::Arc;

use crate::core::{Coordinate, Model};
use crate::sources::ModelCache;

/// Discriminator tag for this crate's cache entries.
pub const MANAGE_TAG: &str = "manage";

/// Borrowed view of the model cache holding managed models.
#[derive(Clone, Copy)]
pub struct ManagementCache<'a> {
    cache: &'a dyn ModelCache,
}

impl<'a> ManagementCache<'a> {
    pub fn new(cache: &'a dyn ModelCache) -> Self {
        ManagementCache { cache }
    }

    /// Look up a managed model.
    ///
    /// A value of any other type under the `manage` tag is treated as absent.
    pub fn get(&self, coordinate: &Coordinate) -> Option<Arc<Model>> {
        let value = self.cache.get(
            &coordinate.group_id,
            &coordinate.artifact_id,
            &coordinate.version,
            MANAGE_TAG,
        )?;
        value.downcast::<Model>().ok()
    }

    /// Store a model unless one is already cached under `coordinate`.
    ///
    /// Returns the model that ends up cached, which is the earlier one when
    /// the key was already taken.
    pub fn put_if_absent(&self, coordinate: &Coordinate, model: Arc<Model>) -> Arc<Model> {
        if let Some(existing) = self.get(coordinate) {
            return existing;
        }
        self.cache.put(
            &coordinate.group_id,
            &coordinate.artifact_id,
            &coordinate.version,
            MANAGE_TAG,
            model.clone(),
        );
        model
    }

    /// Register a model under its own coordinate.
    ///
    /// The cache receives a snapshot; plugin versions filled in afterwards are
    /// not reflected, which is fine because only `dependencyManagement` is ever
    /// read back.
    pub fn register(&self, model: &Model) -> bool {
        let coordinate = model.coordinate();
        if self.get(&coordinate).is_some() {
            return false;
        }
        tracing::debug!("adding model to cache: {}", coordinate);
        self.put_if_absent(&coordinate, Arc::new(model.clone()));
        true
    }
}
