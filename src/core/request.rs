//! Model building requests and results.
//!
//! A request carries everything a builder needs for one model: where to read
//! it from, how strictly to validate it, and the host collaborators (model
//! resolver, per-build model cache) that let import poms be fetched.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::model::Model;
use crate::sources::{ModelCache, ModelResolver, ModelSource};

/// How strictly a builder validates the models it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Only structural problems are reported
    #[default]
    Minimal,
    /// Missing identity fields are reported as errors
    Strict,
}

/// Severity of a problem found while building a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProblemSeverity {
    Warning,
    Error,
    Fatal,
}

impl fmt::Display for ProblemSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemSeverity::Warning => write!(f, "warning"),
            ProblemSeverity::Error => write!(f, "error"),
            ProblemSeverity::Fatal => write!(f, "fatal"),
        }
    }
}

/// A problem reported by a builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelProblem {
    pub severity: ProblemSeverity,
    pub message: String,
    /// Location of the offending model source
    pub source: String,
}

impl ModelProblem {
    pub fn new(
        severity: ProblemSeverity,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        ModelProblem {
            severity,
            message: message.into(),
            source: source.into(),
        }
    }

    /// Check whether this problem prevents the model from being used.
    pub fn is_error(&self) -> bool {
        self.severity >= ProblemSeverity::Error
    }
}

impl fmt::Display for ModelProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} @ {}", self.severity, self.message, self.source)
    }
}

/// A request to build one effective model.
#[derive(Clone, Default)]
pub struct ModelBuildingRequest {
    /// Where to read the model from
    pub model_source: Option<ModelSource>,

    /// Resolves coordinates of import poms to model sources
    pub model_resolver: Option<Arc<dyn ModelResolver>>,

    /// Per-build model cache shared with every derived request
    pub model_cache: Option<Arc<dyn ModelCache>>,

    pub validation_level: ValidationLevel,

    pub location_tracking: bool,
}

impl ModelBuildingRequest {
    /// Create a request for the given model source.
    pub fn new(source: ModelSource) -> Self {
        ModelBuildingRequest {
            model_source: Some(source),
            ..Default::default()
        }
    }

    /// Attach a model resolver.
    pub fn with_resolver(mut self, resolver: Arc<dyn ModelResolver>) -> Self {
        self.model_resolver = Some(resolver);
        self
    }

    /// Attach a model cache.
    pub fn with_cache(mut self, cache: Arc<dyn ModelCache>) -> Self {
        self.model_cache = Some(cache);
        self
    }

    /// Set the validation level.
    pub fn with_validation_level(mut self, level: ValidationLevel) -> Self {
        self.validation_level = level;
        self
    }

    /// Set location tracking.
    pub fn with_location_tracking(mut self, enabled: bool) -> Self {
        self.location_tracking = enabled;
        self
    }

    /// Derive a request for another model source, keeping every other
    /// setting (resolver, cache, validation) of this one.
    pub fn derive(&self, source: ModelSource) -> Self {
        ModelBuildingRequest {
            model_source: Some(source),
            ..self.clone()
        }
    }
}

impl fmt::Debug for ModelBuildingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelBuildingRequest")
            .field("model_source", &self.model_source)
            .field("model_resolver", &self.model_resolver.is_some())
            .field("model_cache", &self.model_cache.is_some())
            .field("validation_level", &self.validation_level)
            .field("location_tracking", &self.location_tracking)
            .finish()
    }
}

/// The outcome of a successful build.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelBuildingResult {
    pub effective_model: Model,
    /// Non-fatal problems
    pub problems: Vec<ModelProblem>,
}

impl ModelBuildingResult {
    pub fn new(effective_model: Model) -> Self {
        ModelBuildingResult {
            effective_model,
            problems: Vec::new(),
        }
    }
}

/// The outcome of reading a raw model.
///
/// Raw reads never fail outright; problems are collected instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawModelResult {
    pub model: Option<Model>,
    pub problems: Vec<ModelProblem>,
}

impl RawModelResult {
    /// Check whether any error-severity problem was reported.
    pub fn has_errors(&self) -> bool {
        self.problems.iter().any(ModelProblem::is_error)
    }
}
