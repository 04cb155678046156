//! Core data structures for pomgraft.
//!
//! This module contains the foundational types used throughout pomgraft:
//! - Coordinates (version-independent keys and `g:a:v` triples)
//! - Dependency declarations
//! - Effective models with their plugins and dependency management
//! - Build requests and results exchanged with model builders

pub mod coordinate;
pub mod dependency;
pub mod model;
pub mod request;

pub use coordinate::{Coordinate, CoordinateKey};
pub use dependency::Dependency;
pub use model::{Build, DependencyManagement, Model, Plugin, PluginManagement};
pub use request::{
    ModelBuildingRequest, ModelBuildingResult, ModelProblem, ProblemSeverity, RawModelResult,
    ValidationLevel,
};
