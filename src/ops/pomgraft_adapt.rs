//! Implementation of `pomgraft adapt` and `pomgraft check`.
//!
//! Both commands install the managing builder in front of the document
//! builder, exactly as a host would, and run one model through it.

use std::fmt::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::builder::{BuilderRegistry, DocumentModelBuilder, ManagingModelBuilder, ModelBuilder};
use crate::core::{Model, ModelBuildingRequest, ModelProblem, ValidationLevel};
use crate::resolver::{AdaptReport, ModelBuildingError, MANAGE_TAG};
use crate::sources::{InMemoryModelCache, ModelSource, RepositoryResolver};
use crate::util::config::Config;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Options for adapting one model document.
#[derive(Debug, Clone, Default)]
pub struct AdaptOptions {
    /// Model document to adapt
    pub model: PathBuf,

    /// Repository roots for import poms, searched in order
    pub repositories: Vec<PathBuf>,

    /// Read the model raw: no import poms, no cache
    pub raw: bool,

    pub validation: ValidationLevel,

    pub location_tracking: bool,
}

impl AdaptOptions {
    /// Options for `model` with defaults taken from `config`.
    ///
    /// Repositories given on the command line replace configured ones.
    pub fn from_config(model: PathBuf, repositories: Vec<PathBuf>, config: &Config) -> Self {
        let repositories = if repositories.is_empty() {
            config.repository.paths.clone()
        } else {
            repositories
        };

        AdaptOptions {
            model,
            repositories,
            raw: false,
            validation: config.validation_level(),
            location_tracking: config.location_tracking(),
        }
    }
}

/// The adapted model and what was done to it.
#[derive(Debug, Clone)]
pub struct AdaptOutcome {
    pub model: Model,
    pub report: AdaptReport,
    /// Non-fatal problems reported while building
    pub problems: Vec<ModelProblem>,
}

/// Adapt a model document.
pub fn adapt_model(opts: &AdaptOptions) -> Result<AdaptOutcome, ModelBuildingError> {
    let mut peers = BuilderRegistry::new();
    peers.register(Arc::new(DocumentModelBuilder::new()));
    let builder = ManagingModelBuilder::new(peers);

    let (model, problems) = if opts.raw {
        let raw = builder.build_raw_model(&opts.model, opts.validation, opts.location_tracking)?;
        let location = opts.model.display().to_string();
        if raw.has_errors() {
            return Err(ModelBuildingError::build(location, raw.problems));
        }
        match raw.model {
            Some(model) => (model, raw.problems),
            None => return Err(ModelBuildingError::build(location, raw.problems)),
        }
    } else {
        let cache = Arc::new(InMemoryModelCache::new());
        let request = ModelBuildingRequest::new(ModelSource::file(&opts.model))
            .with_resolver(Arc::new(RepositoryResolver::new(opts.repositories.clone())))
            .with_cache(cache.clone())
            .with_validation_level(opts.validation)
            .with_location_tracking(opts.location_tracking);

        let result = builder.build(&request)?;
        tracing::debug!(
            "{} dependency management block(s) cached",
            cache.count_tagged(MANAGE_TAG)
        );
        (result.effective_model, result.problems)
    };

    Ok(AdaptOutcome {
        report: builder.last_report().unwrap_or_default(),
        model,
        problems,
    })
}

/// Warnings for every plugin dependency left without a version.
pub fn unmanaged_diagnostics(report: &AdaptReport) -> Vec<Diagnostic> {
    report
        .unmanaged
        .iter()
        .map(|unmanaged| {
            Diagnostic::warning(format!(
                "unmanaged plugin dependency without version: {}",
                unmanaged.key
            ))
            .with_context(format!("declared by plugin {}", unmanaged.plugin))
            .with_suggestion(suggestions::UNMANAGED)
        })
        .collect()
}

/// Format an adaptation report for display.
pub fn format_report(report: &AdaptReport) -> String {
    let mut output = String::new();

    if let Some(model) = &report.model {
        let _ = writeln!(output, "Model {}", model);
    }

    for managed in &report.resolved {
        let _ = writeln!(
            output,
            "  [OK] {} -> {} (plugin {})",
            managed.key, managed.version, managed.plugin
        );
    }
    for unmanaged in &report.unmanaged {
        let _ = writeln!(
            output,
            "  [!!] {} unmanaged (plugin {})",
            unmanaged.key, unmanaged.plugin
        );
    }

    let _ = writeln!(
        output,
        "{} managed, {} unmanaged",
        report.resolved.len(),
        report.unmanaged.len()
    );

    output
}
