//! Plugin dependency adaptation.
//!
//! Walks `build.plugins` and then `build.pluginManagement.plugins` of an
//! effective model and fills in the version of every versionless plugin
//! dependency from the model's `dependencyManagement`. Versions already
//! present are never touched. Dependencies nothing manages are left
//! versionless and reported with a warning; the downstream build then fails
//! with its own "missing version" error.

use std::collections::HashMap;

use crate::builder::ModelBuilder;
use crate::core::{
    Coordinate, CoordinateKey, DependencyManagement, Model, ModelBuildingRequest, Plugin,
};
use crate::resolver::cache_view::ManagementCache;
use crate::resolver::errors::ModelBuildingError;
use crate::resolver::import::ImportFetcher;
use crate::resolver::version::VersionResolver;

/// A version filled in on a plugin dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedVersion {
    /// `groupId:artifactId:version` of the plugin
    pub plugin: String,
    pub key: CoordinateKey,
    pub version: String,
}

/// A versionless plugin dependency no management entry covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmanagedDependency {
    pub plugin: String,
    pub key: CoordinateKey,
}

/// What one adaptation pass did to a model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdaptReport {
    pub model: Option<Coordinate>,
    pub resolved: Vec<ManagedVersion>,
    pub unmanaged: Vec<UnmanagedDependency>,
    /// Number of management lookups performed; repeated keys are memoized
    pub walks: usize,
}

impl AdaptReport {
    /// Check whether every plugin dependency ended up with a version.
    pub fn is_complete(&self) -> bool {
        self.unmanaged.is_empty()
    }
}

/// Memoized lookups for one model. An empty string records "unmanaged".
type SeenVersions = HashMap<CoordinateKey, String>;

/// Fills in plugin dependency versions.
pub struct ModelAdapter<'a> {
    builder: &'a dyn ModelBuilder,
}

impl<'a> ModelAdapter<'a> {
    /// Create an adapter that builds import poms with `builder`.
    pub fn new(builder: &'a dyn ModelBuilder) -> Self {
        ModelAdapter { builder }
    }

    /// Adapt a model in place.
    ///
    /// With a request, the model is registered in the request's `manage`
    /// cache and import poms are followed. Without one (raw models), only the
    /// model's own management block is consulted.
    pub fn adapt(
        &self,
        model: &mut Model,
        request: Option<&ModelBuildingRequest>,
    ) -> Result<AdaptReport, ModelBuildingError> {
        let coordinate = model.coordinate();
        tracing::debug!("requested model: {}", coordinate);

        let mut report = AdaptReport {
            model: Some(coordinate.clone()),
            ..Default::default()
        };

        if let Some(cache) = request.and_then(|r| r.model_cache.as_deref()) {
            ManagementCache::new(cache).register(model);
        }

        let Model {
            build,
            dependency_management,
            ..
        } = model;

        let Some(build) = build.as_mut() else {
            return Ok(report);
        };

        let resolver = match request {
            Some(request) => VersionResolver::new(ImportFetcher::new(request, self.builder)),
            None => VersionResolver::local_only(),
        };
        let management = dependency_management.as_ref();
        let mut seen = SeenVersions::new();

        let plugin_management = build
            .plugin_management
            .as_mut()
            .map(|pm| pm.plugins.iter_mut());
        let plugins = build
            .plugins
            .iter_mut()
            .chain(plugin_management.into_iter().flatten());

        for plugin in plugins {
            adapt_plugin(
                plugin,
                &coordinate,
                management,
                &resolver,
                &mut seen,
                &mut report,
            )?;
        }

        Ok(report)
    }
}

fn adapt_plugin(
    plugin: &mut Plugin,
    model: &Coordinate,
    management: Option<&DependencyManagement>,
    resolver: &VersionResolver<'_>,
    seen: &mut SeenVersions,
    report: &mut AdaptReport,
) -> Result<(), ModelBuildingError> {
    let plugin_id = plugin.to_string();

    for dependency in plugin.dependencies.iter_mut() {
        if dependency.has_version() {
            continue;
        }

        let key = dependency.key();

        let version = match seen.get(&key) {
            Some(version) => version.clone(),
            None => {
                report.walks += 1;
                let version = resolver.resolve(management, &key)?.unwrap_or_else(|| {
                    tracing::debug!("dependency management not found in {}", model);
                    String::new()
                });
                seen.insert(key.clone(), version.clone());
                version
            }
        };

        if version.is_empty() {
            tracing::warn!(
                "unmanaged plugin dependency without version found {} of plugin {}",
                key,
                plugin_id
            );
            report.unmanaged.push(UnmanagedDependency {
                plugin: plugin_id.clone(),
                key,
            });
        } else {
            tracing::info!("setting version of {} to {}", key, version);
            dependency.fill_version(version.clone());
            report.resolved.push(ManagedVersion {
                plugin: plugin_id.clone(),
                key,
                version,
            });
        }
    }

    Ok(())
}
