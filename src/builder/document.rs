//! Document model builder.
//!
//! Reads model documents that are already effective (inheritance and
//! interpolation applied upstream) and validates them. This is the default
//! builder the managing builder delegates to when pomgraft runs on its own.

use std::path::Path;

use crate::builder::trait_def::ModelBuilder;
use crate::core::{
    Model, ModelBuildingRequest, ModelBuildingResult, ModelProblem, ProblemSeverity,
    RawModelResult, ValidationLevel,
};
use crate::resolver::ModelBuildingError;
use crate::sources::ModelSource;

/// Builds models from JSON documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentModelBuilder;

impl DocumentModelBuilder {
    /// Registration name.
    pub const NAME: &'static str = "document";

    pub fn new() -> Self {
        DocumentModelBuilder
    }

    fn read(source: &ModelSource) -> Result<Model, ModelBuildingError> {
        let text = source.read().map_err(|e| ModelBuildingError::Source {
            location: source.location(),
            message: e.to_string(),
        })?;

        Model::from_json(&text).map_err(|e| ModelBuildingError::Source {
            location: source.location(),
            message: e.to_string(),
        })
    }

    fn finish(
        mut result: ModelBuildingResult,
        location: &str,
        level: ValidationLevel,
    ) -> Result<ModelBuildingResult, ModelBuildingError> {
        let problems = validate(&result.effective_model, level, location);
        if problems.iter().any(ModelProblem::is_error) {
            return Err(ModelBuildingError::build(location, problems));
        }
        result.problems.extend(problems);
        Ok(result)
    }
}

impl ModelBuilder for DocumentModelBuilder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn build(
        &self,
        request: &ModelBuildingRequest,
    ) -> Result<ModelBuildingResult, ModelBuildingError> {
        let source = request.model_source.as_ref().ok_or_else(|| {
            ModelBuildingError::build(
                "<unknown>",
                vec![ModelProblem::new(
                    ProblemSeverity::Fatal,
                    "request has no model source",
                    "<unknown>",
                )],
            )
        })?;

        let model = Self::read(source)?;
        tracing::debug!("read model {} from {}", model.coordinate(), source);

        Self::finish(
            ModelBuildingResult::new(model),
            &source.location(),
            request.validation_level,
        )
    }

    fn build_with_result(
        &self,
        request: &ModelBuildingRequest,
        partial: ModelBuildingResult,
    ) -> Result<ModelBuildingResult, ModelBuildingError> {
        // Documents are complete after the first phase, so the partial result
        // only needs validating against this request.
        let location = request
            .model_source
            .as_ref()
            .map(ModelSource::location)
            .unwrap_or_else(|| partial.effective_model.coordinate().to_string());

        Self::finish(partial, &location, request.validation_level)
    }

    fn build_raw_model(
        &self,
        pom: &Path,
        validation_level: ValidationLevel,
        _location_tracking: bool,
    ) -> Result<RawModelResult, ModelBuildingError> {
        let location = pom.display().to_string();

        match Self::read(&ModelSource::file(pom)) {
            Ok(model) => {
                let problems = validate(&model, validation_level, &location);
                Ok(RawModelResult {
                    model: Some(model),
                    problems,
                })
            }
            Err(err) => Ok(RawModelResult {
                model: None,
                problems: vec![ModelProblem::new(
                    ProblemSeverity::Fatal,
                    err.to_string(),
                    location,
                )],
            }),
        }
    }
}

/// Check a model for problems.
///
/// Dependencies must always name a group and artifact. Strict validation
/// also requires the model's own identity and versions on import entries.
pub fn validate(model: &Model, level: ValidationLevel, location: &str) -> Vec<ModelProblem> {
    let mut problems = Vec::new();
    let mut problem = |severity, message: String| {
        problems.push(ModelProblem::new(severity, message, location));
    };

    if level == ValidationLevel::Strict {
        for (field, value) in [
            ("groupId", &model.group_id),
            ("artifactId", &model.artifact_id),
            ("version", &model.version),
        ] {
            if value.is_empty() {
                problem(ProblemSeverity::Error, format!("'{}' is missing", field));
            }
        }
    }

    let managed = model
        .dependency_management
        .iter()
        .flat_map(|dm| dm.dependencies.iter());

    for dependency in managed {
        if dependency.group_id.is_empty() || dependency.artifact_id.is_empty() {
            problem(
                ProblemSeverity::Error,
                "'dependencyManagement.dependencies.dependency' is missing a groupId or artifactId"
                    .to_string(),
            );
        } else if level == ValidationLevel::Strict
            && dependency.is_bom_import()
            && !dependency.has_version()
        {
            problem(
                ProblemSeverity::Error,
                format!("import of {} has no version", dependency.key()),
            );
        }
    }

    for (plugin, dependency) in model.plugin_dependencies() {
        if dependency.group_id.is_empty() || dependency.artifact_id.is_empty() {
            problem(
                ProblemSeverity::Error,
                format!(
                    "dependency of plugin {} is missing a groupId or artifactId",
                    plugin
                ),
            );
        }
    }

    problems
}
