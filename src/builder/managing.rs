//! The plugin-dependency managing builder.
//!
//! Installed in place of the host's default builder. Every build is handed
//! to the default builder first; the effective model that comes back is then
//! patched so versionless plugin dependencies pick up their versions from
//! `dependencyManagement`.

use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use crate::builder::registry::BuilderRegistry;
use crate::builder::trait_def::ModelBuilder;
use crate::core::{ModelBuildingRequest, ModelBuildingResult, RawModelResult, ValidationLevel};
use crate::resolver::{AdaptReport, ModelAdapter, ModelBuildingError};

/// A model builder that manages plugin dependency versions.
pub struct ManagingModelBuilder {
    peers: BuilderRegistry,
    delegate: OnceLock<Arc<dyn ModelBuilder>>,
    last_report: Mutex<Option<AdaptReport>>,
}

impl ManagingModelBuilder {
    /// Registration name.
    pub const NAME: &'static str = "manage-plugin-dependencies";

    /// Create a builder that delegates to one of `peers`.
    pub fn new(peers: BuilderRegistry) -> Self {
        ManagingModelBuilder {
            peers,
            delegate: OnceLock::new(),
            last_report: Mutex::new(None),
        }
    }

    /// The builder every request is delegated to.
    ///
    /// The first peer other than this builder instance is chosen on first
    /// use and kept for the lifetime of the builder.
    pub fn delegate(&self) -> Result<&Arc<dyn ModelBuilder>, ModelBuildingError> {
        if let Some(delegate) = self.delegate.get() {
            return Ok(delegate);
        }

        let found = self.peers.first_except(self).ok_or_else(|| {
            ModelBuildingError::Configuration {
                message: "no default builder available".to_string(),
            }
        })?;
        tracing::debug!("delegating model builds to `{}`", found.name());

        Ok(self.delegate.get_or_init(|| found))
    }

    /// The report of the most recent adaptation, if any.
    pub fn last_report(&self) -> Option<AdaptReport> {
        self.last_report
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn record(&self, report: AdaptReport) {
        *self.last_report.lock().unwrap_or_else(|e| e.into_inner()) = Some(report);
    }

    fn adapt(
        &self,
        delegate: &dyn ModelBuilder,
        request: &ModelBuildingRequest,
        mut result: ModelBuildingResult,
    ) -> Result<ModelBuildingResult, ModelBuildingError> {
        let report =
            ModelAdapter::new(delegate).adapt(&mut result.effective_model, Some(request))?;
        self.record(report);
        Ok(result)
    }
}

impl ModelBuilder for ManagingModelBuilder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn build(
        &self,
        request: &ModelBuildingRequest,
    ) -> Result<ModelBuildingResult, ModelBuildingError> {
        let delegate = self.delegate()?;
        let result = delegate.build(request)?;
        self.adapt(delegate.as_ref(), request, result)
    }

    fn build_with_result(
        &self,
        request: &ModelBuildingRequest,
        partial: ModelBuildingResult,
    ) -> Result<ModelBuildingResult, ModelBuildingError> {
        let delegate = self.delegate()?;
        let result = delegate.build_with_result(request, partial)?;
        self.adapt(delegate.as_ref(), request, result)
    }

    fn build_raw_model(
        &self,
        pom: &Path,
        validation_level: ValidationLevel,
        location_tracking: bool,
    ) -> Result<RawModelResult, ModelBuildingError> {
        let delegate = self.delegate()?;
        let mut result = delegate.build_raw_model(pom, validation_level, location_tracking)?;

        if result.has_errors() {
            return Ok(result);
        }

        if let Some(model) = result.model.as_mut() {
            let report = ModelAdapter::new(delegate.as_ref()).adapt(model, None)?;
            self.record(report);
        }

        Ok(result)
    }
}

impl std::fmt::Debug for ManagingModelBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagingModelBuilder")
            .field("peers", &self.peers)
            .field("delegate", &self.delegate.get().map(|d| d.name().to_string()))
            .finish()
    }
}
