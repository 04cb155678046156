//! ModelBuilder trait definition.
//!
//! The host builds every model through a `ModelBuilder`. Builders are plain
//! trait objects so that one builder can wrap another.

use std::path::Path;

use crate::core::{ModelBuildingRequest, ModelBuildingResult, RawModelResult, ValidationLevel};
use crate::resolver::ModelBuildingError;

/// Builds effective models.
pub trait ModelBuilder: Send + Sync {
    /// Name the builder is registered under.
    fn name(&self) -> &str;

    /// Build the effective model described by `request`.
    fn build(
        &self,
        request: &ModelBuildingRequest,
    ) -> Result<ModelBuildingResult, ModelBuildingError>;

    /// Finish a build that an earlier `build` call started.
    fn build_with_result(
        &self,
        request: &ModelBuildingRequest,
        partial: ModelBuildingResult,
    ) -> Result<ModelBuildingResult, ModelBuildingError>;

    /// Read a single model file without inheritance or interpolation.
    ///
    /// Problems in the file are reported in the result rather than as an
    /// error.
    fn build_raw_model(
        &self,
        pom: &Path,
        validation_level: ValidationLevel,
        location_tracking: bool,
    ) -> Result<RawModelResult, ModelBuildingError>;
}
