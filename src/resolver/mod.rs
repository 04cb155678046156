//! Plugin dependency management.
//!
//! This module fills in versionless plugin dependencies from the same
//! `dependencyManagement` rules, including imported BOMs, that already govern
//! a project's ordinary dependencies:
//!
//! - [`ModelAdapter`] walks a model's plugins and patches them in place
//! - [`VersionResolver`] performs the first-match lookup over management blocks
//! - [`ImportFetcher`] brings in `scope=import, type=pom` entries
//! - [`ManagementCache`] keeps each imported model to one build per invocation

pub mod adapter;
pub mod cache_view;
pub mod errors;
pub mod import;
pub mod version;

pub use adapter::{AdaptReport, ManagedVersion, ModelAdapter, UnmanagedDependency};
pub use cache_view::{ManagementCache, MANAGE_TAG};
pub use errors::ModelBuildingError;
pub use import::ImportFetcher;
pub use version::VersionResolver;
