//! Test fixtures for common test scenarios.
//!
//! This module provides pre-built models and a repository fixture that
//! lays models out on disk the way [`RepositoryResolver`] expects.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::{Dependency, Model, Plugin};
use crate::sources::RepositoryResolver;

/// A BOM: a model whose only content is dependency management.
pub fn bom(group_id: &str, artifact_id: &str, version: &str, managed: Vec<Dependency>) -> Model {
    Model::new(group_id, artifact_id, version).with_managed(managed)
}

/// A project with one plugin depending on the given versionless artifacts.
pub fn project_with_plugin(managed: Vec<Dependency>, plugin_dependencies: &[(&str, &str)]) -> Model {
    let plugin = plugin_dependencies.iter().fold(
        Plugin::new("org.example.plugins", "codegen-plugin").with_version("1.0"),
        |plugin, (group_id, artifact_id)| {
            plugin.with_dependency(Dependency::new(*group_id, *artifact_id))
        },
    );

    Model::new("org.example", "app", "1.0.0")
        .with_managed(managed)
        .with_plugin(plugin)
}

/// A model repository in a temporary directory.
pub struct RepositoryFixture {
    dir: TempDir,
}

impl RepositoryFixture {
    /// Create an empty repository.
    pub fn new() -> std::io::Result<Self> {
        Ok(RepositoryFixture {
            dir: TempDir::new()?,
        })
    }

    /// Root directory of the repository.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Install a model under its own coordinate.
    pub fn install(&self, model: &Model) -> std::io::Result<PathBuf> {
        let path = RepositoryResolver::layout_path(self.root(), &model.coordinate())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let document = model
            .to_json_pretty()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(&path, document)?;
        Ok(path)
    }

    /// A resolver reading from this repository only.
    pub fn resolver(&self) -> RepositoryResolver {
        RepositoryResolver::new(vec![self.root().to_path_buf()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::ModelResolver;

    #[test]
    fn test_repository_fixture_round_trip() {
        let repo = RepositoryFixture::new().unwrap();
        let model = bom("org.example.boms", "platform", "2.0", vec![]);

        let path = repo.install(&model).unwrap();
        assert!(path.ends_with("org/example/boms/platform/2.0/platform-2.0.pom.json"));

        let source = repo.resolver().resolve_model(&model.coordinate()).unwrap();
        let read = Model::from_json(&source.read().unwrap()).unwrap();
        assert_eq!(read, model);
    }

    #[test]
    fn test_project_with_plugin() {
        let project = project_with_plugin(vec![], &[("x", "y"), ("x", "z")]);

        let keys: Vec<_> = project
            .plugin_dependencies()
            .map(|(_, d)| d.key().to_string())
            .collect();
        assert_eq!(keys, vec!["x:y:null:null", "x:z:null:null"]);
    }
}
