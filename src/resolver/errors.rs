//! Model building error types and diagnostics.

use thiserror::Error;

use crate::core::{Coordinate, ModelProblem};
use crate::sources::UnresolvableModelError;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error while building or adapting a model.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum ModelBuildingError {
    /// The delegated builder rejected the request.
    #[error("failed to build model `{model}`")]
    #[diagnostic(code(pomgraft::build::failed))]
    Build {
        model: String,
        problems: Vec<ModelProblem>,
    },

    /// A model source could not be read or decoded.
    #[error("failed to read model from `{location}`: {message}")]
    #[diagnostic(code(pomgraft::build::source))]
    Source { location: String, message: String },

    /// An import pom required for version management could not be fetched.
    #[error("failed to fetch import pom `{coordinate}`")]
    #[diagnostic(
        code(pomgraft::resolve::unresolvable),
        help("Check that the BOM is published to one of the configured repositories")
    )]
    Resolve {
        coordinate: Coordinate,
        #[source]
        source: UnresolvableModelError,
    },

    /// The builder is installed in a host that offers no default builder.
    #[error("{message}")]
    #[diagnostic(code(pomgraft::config::no_delegate))]
    Configuration { message: String },
}

impl ModelBuildingError {
    /// Create a build error from a list of problems.
    pub fn build(model: impl Into<String>, problems: Vec<ModelProblem>) -> Self {
        ModelBuildingError::Build {
            model: model.into(),
            problems,
        }
    }

    /// The problems reported by the builder, if any.
    pub fn problems(&self) -> &[ModelProblem] {
        match self {
            ModelBuildingError::Build { problems, .. } => problems,
            _ => &[],
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ModelBuildingError::Build { model, problems } => {
                let mut diag = Diagnostic::error(format!("failed to build model `{}`", model));
                for problem in problems {
                    diag = diag.with_context(problem.to_string());
                }
                diag.with_suggestion("Fix the reported problems in the model document")
            }

            ModelBuildingError::Source { location, message } => {
                Diagnostic::error(format!("failed to read model from `{}`", location))
                    .with_context(message.clone())
                    .with_location(location.clone())
                    .with_suggestion("Check that the file exists and is a JSON model document")
            }

            ModelBuildingError::Resolve { coordinate, source } => {
                Diagnostic::error(format!("failed to fetch import pom `{}`", coordinate))
                    .with_context(source.reason.clone())
                    .with_suggestion(suggestions::MISSING_BOM)
                    .with_suggestion(
                        "Check the `scope=import, type=pom` entry's coordinates for typos",
                    )
            }

            ModelBuildingError::Configuration { message } => Diagnostic::error(message.clone())
                .with_suggestion("Register a default model builder alongside pomgraft"),
        }
    }
}
