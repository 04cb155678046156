//! Import pom fetching.
//!
//! A `scope=import, type=pom` management entry points at another model whose
//! `dependencyManagement` joins the lookup. Fetching consults the `manage`
//! cache first; on a miss the coordinate is resolved to a model source and
//! built with the delegated builder under a request derived from the current
//! one, so the same cache and resolver are used all the way down.

use std::sync::Arc;

use crate::builder::ModelBuilder;
use crate::core::{Coordinate, Dependency, Model, ModelBuildingRequest};
use crate::resolver::cache_view::ManagementCache;
use crate::resolver::errors::ModelBuildingError;
use crate::sources::UnresolvableModelError;

/// Fetches import poms for one build request.
pub struct ImportFetcher<'a> {
    request: &'a ModelBuildingRequest,
    builder: &'a dyn ModelBuilder,
}

impl<'a> ImportFetcher<'a> {
    /// Create a fetcher that builds imports with `builder`.
    pub fn new(request: &'a ModelBuildingRequest, builder: &'a dyn ModelBuilder) -> Self {
        ImportFetcher { request, builder }
    }

    fn cache(&self) -> Option<ManagementCache<'a>> {
        self.request
            .model_cache
            .as_deref()
            .map(ManagementCache::new)
    }

    /// Fetch the model an import entry points at.
    pub fn fetch(&self, entry: &Dependency) -> Result<Arc<Model>, ModelBuildingError> {
        let coordinate = entry.coordinate().ok_or_else(|| {
            let coordinate = Coordinate::new(&entry.group_id, &entry.artifact_id, "");
            ModelBuildingError::Resolve {
                coordinate: coordinate.clone(),
                source: UnresolvableModelError::new(coordinate, "import entry has no version"),
            }
        })?;

        let cache = self.cache();

        tracing::debug!("checking 'manage' cache for: {}", coordinate);
        if let Some(model) = cache.and_then(|cache| cache.get(&coordinate)) {
            return Ok(model);
        }

        tracing::debug!("checking repositories for: {}", coordinate);
        let resolver = self.request.model_resolver.as_ref().ok_or_else(|| {
            ModelBuildingError::Resolve {
                coordinate: coordinate.clone(),
                source: UnresolvableModelError::new(
                    coordinate.clone(),
                    "no model resolver attached to the build request",
                ),
            }
        })?;

        let source =
            resolver
                .resolve_model(&coordinate)
                .map_err(|source| ModelBuildingError::Resolve {
                    coordinate: coordinate.clone(),
                    source,
                })?;

        let import_request = self.request.derive(source);
        let imported = self.builder.build(&import_request)?;
        let model = Arc::new(imported.effective_model);

        Ok(match cache {
            Some(cache) => cache.put_if_absent(&coordinate, model),
            None => model,
        })
    }
}
