//! pomgraft - plugin dependency management for effective models
//!
//! This crate provides a model builder that fills in the versions of
//! versionless plugin dependencies from a model's `dependencyManagement`,
//! including BOMs brought in with `scope=import, type=pom`.

pub mod builder;
pub mod core;
pub mod ops;
pub mod resolver;
pub mod sources;
pub mod util;

/// Test utilities and mocks for pomgraft unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides an in-memory model resolver, a counting
/// model cache, stub builders and model fixtures.
#[cfg(test)]
pub mod test_support;

pub use builder::{BuilderRegistry, DocumentModelBuilder, ManagingModelBuilder, ModelBuilder};
pub use core::{
    Coordinate, CoordinateKey, Dependency, Model, ModelBuildingRequest, ModelBuildingResult,
    Plugin, RawModelResult, ValidationLevel,
};
pub use resolver::{AdaptReport, ModelAdapter, ModelBuildingError};
pub use sources::{InMemoryModelCache, ModelCache, ModelResolver, ModelSource, RepositoryResolver};
