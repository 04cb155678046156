//! Managed version lookup.
//!
//! A lookup scans a `dependencyManagement` block in declaration order. The
//! first entry whose coordinate key equals the target wins. An import entry
//! met before any match is expanded in place: its own block is scanned to the
//! end (recursively) before the scan continues after the import.
//!
//! The walk uses an explicit stack rather than recursion, and remembers every
//! import it entered so an import cycle cannot loop.

use std::collections::HashSet;
use std::sync::Arc;

use crate::core::{Coordinate, CoordinateKey, Dependency, DependencyManagement, Model};
use crate::resolver::errors::ModelBuildingError;
use crate::resolver::import::ImportFetcher;

enum Block<'b> {
    Local(&'b DependencyManagement),
    Imported(Arc<Model>),
}

impl Block<'_> {
    fn entries(&self) -> &[Dependency] {
        match self {
            Block::Local(block) => &block.dependencies,
            Block::Imported(model) => model
                .dependency_management
                .as_ref()
                .map(|block| block.dependencies.as_slice())
                .unwrap_or(&[]),
        }
    }
}

struct Frame<'b> {
    block: Block<'b>,
    next: usize,
}

/// Looks up managed versions, optionally following import poms.
pub struct VersionResolver<'a> {
    imports: Option<ImportFetcher<'a>>,
}

impl<'a> VersionResolver<'a> {
    /// A resolver that follows import poms through `imports`.
    pub fn new(imports: ImportFetcher<'a>) -> Self {
        VersionResolver {
            imports: Some(imports),
        }
    }

    /// A resolver that only consults the given block and skips every import.
    pub fn local_only() -> Self {
        VersionResolver { imports: None }
    }

    /// Find the managed version for `target`.
    ///
    /// Returns `Ok(None)` when no reachable entry matches. A matching entry
    /// without a version ends the scan of the block it sits in; the importing
    /// block then carries on with its next entry.
    pub fn resolve(
        &self,
        block: Option<&DependencyManagement>,
        target: &CoordinateKey,
    ) -> Result<Option<String>, ModelBuildingError> {
        let Some(block) = block else {
            return Ok(None);
        };

        let mut stack = vec![Frame {
            block: Block::Local(block),
            next: 0,
        }];
        let mut entered: HashSet<Coordinate> = HashSet::new();

        while let Some(frame) = stack.last_mut() {
            let entry = match frame.block.entries().get(frame.next) {
                Some(entry) => entry.clone(),
                None => {
                    stack.pop();
                    continue;
                }
            };
            frame.next += 1;

            tracing::debug!(
                "checking dependency management for {}:{} => {}",
                entry.group_id,
                entry.artifact_id,
                entry.version.as_deref().unwrap_or("null")
            );

            if entry.matches(target) {
                match entry.version {
                    Some(version) => return Ok(Some(version)),
                    None => {
                        stack.pop();
                        continue;
                    }
                }
            }

            let Some(imports) = &self.imports else {
                continue;
            };
            if !entry.is_bom_import() {
                continue;
            }

            if let Some(coordinate) = entry.coordinate() {
                if !entered.insert(coordinate.clone()) {
                    tracing::debug!("import {} already visited, skipping", coordinate);
                    continue;
                }
            }

            tracing::debug!(
                "checking dependency management import {}:{}:{}",
                entry.group_id,
                entry.artifact_id,
                entry.version.as_deref().unwrap_or("null")
            );
            let model = imports.fetch(&entry)?;
            stack.push(Frame {
                block: Block::Imported(model),
                next: 0,
            });
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DocumentModelBuilder;
    use crate::core::ModelBuildingRequest;
    use crate::sources::{InMemoryModelCache, ModelSource};
    use crate::test_support::{bom, MapResolver};

    fn managed(entries: Vec<Dependency>) -> DependencyManagement {
        DependencyManagement {
            dependencies: entries,
        }
    }

    fn jar(group: &str, artifact: &str, version: &str) -> Dependency {
        Dependency::new(group, artifact)
            .with_type("jar")
            .with_version(version)
    }

    fn key(group: &str, artifact: &str) -> CoordinateKey {
        CoordinateKey::new(group, artifact, Some("jar"), None)
    }

    fn request(resolver: &MapResolver) -> ModelBuildingRequest {
        ModelBuildingRequest::new(ModelSource::memory("root", "{}"))
            .with_resolver(Arc::new(resolver.clone()))
            .with_cache(Arc::new(InMemoryModelCache::new()))
    }

    #[test]
    fn test_missing_block() {
        let resolver = VersionResolver::local_only();
        assert_eq!(resolver.resolve(None, &key("x", "y")).unwrap(), None);
    }

    #[test]
    fn test_first_local_match_wins() {
        let block = managed(vec![jar("x", "y", "1.0"), jar("x", "y", "2.0")]);
        let resolver = VersionResolver::local_only();

        assert_eq!(
            resolver.resolve(Some(&block), &key("x", "y")).unwrap(),
            Some("1.0".to_string())
        );
    }

    #[test]
    fn test_type_and_classifier_must_match() {
        let block = managed(vec![
            Dependency::new("x", "y").with_version("untyped"),
            jar("x", "y", "plain").with_classifier("tests"),
        ]);
        let resolver = VersionResolver::local_only();

        assert_eq!(resolver.resolve(Some(&block), &key("x", "y")).unwrap(), None);
        assert_eq!(
            resolver
                .resolve(
                    Some(&block),
                    &CoordinateKey::new("x", "y", Some("jar"), Some("tests"))
                )
                .unwrap(),
            Some("plain".to_string())
        );
    }

    #[test]
    fn test_local_only_skips_imports() {
        let mut repo = MapResolver::new();
        repo.add(bom("bom", "b", "1", vec![jar("x", "y", "9.9.9")]));
        let block = managed(vec![Dependency::bom_import("bom", "b", "1")]);

        let resolver = VersionResolver::local_only();

        assert_eq!(resolver.resolve(Some(&block), &key("x", "y")).unwrap(), None);
        assert_eq!(repo.resolutions(), 0);
    }

    #[test]
    fn test_nested_imports() {
        let mut repo = MapResolver::new();
        repo.add(bom(
            "bom",
            "outer",
            "1",
            vec![Dependency::bom_import("bom", "inner", "1")],
        ));
        repo.add(bom("bom", "inner", "1", vec![jar("x", "y", "4.2")]));
        let block = managed(vec![Dependency::bom_import("bom", "outer", "1")]);

        let request = request(&repo);
        let builder = DocumentModelBuilder::new();
        let resolver = VersionResolver::new(ImportFetcher::new(&request, &builder));

        assert_eq!(
            resolver.resolve(Some(&block), &key("x", "y")).unwrap(),
            Some("4.2".to_string())
        );
        assert_eq!(repo.resolutions(), 2);
    }

    #[test]
    fn test_versionless_match_in_import_continues_outer_scan() {
        let mut repo = MapResolver::new();
        repo.add(bom(
            "bom",
            "b",
            "1",
            vec![
                Dependency::new("x", "y").with_type("jar"),
                jar("x", "y", "ignored"),
            ],
        ));
        let block = managed(vec![
            Dependency::bom_import("bom", "b", "1"),
            jar("x", "y", "5.0.0"),
        ]);

        let request = request(&repo);
        let builder = DocumentModelBuilder::new();
        let resolver = VersionResolver::new(ImportFetcher::new(&request, &builder));

        assert_eq!(
            resolver.resolve(Some(&block), &key("x", "y")).unwrap(),
            Some("5.0.0".to_string())
        );
    }

    #[test]
    fn test_import_cycle_terminates() {
        let mut repo = MapResolver::new();
        repo.add(bom("bom", "a", "1", vec![Dependency::bom_import("bom", "b", "1")]));
        repo.add(bom("bom", "b", "1", vec![Dependency::bom_import("bom", "a", "1")]));
        let block = managed(vec![Dependency::bom_import("bom", "a", "1")]);

        let request = request(&repo);
        let builder = DocumentModelBuilder::new();
        let resolver = VersionResolver::new(ImportFetcher::new(&request, &builder));

        assert_eq!(resolver.resolve(Some(&block), &key("x", "y")).unwrap(), None);
        assert_eq!(repo.resolutions(), 2);
    }

    #[test]
    fn test_unresolvable_import_propagates() {
        let repo = MapResolver::new();
        let block = managed(vec![Dependency::bom_import("bom", "gone", "1")]);

        let request = request(&repo);
        let builder = DocumentModelBuilder::new();
        let resolver = VersionResolver::new(ImportFetcher::new(&request, &builder));

        let err = resolver.resolve(Some(&block), &key("x", "y")).unwrap_err();
        assert!(matches!(err, ModelBuildingError::Resolve { .. }));
    }

    #[test]
    fn test_match_before_import_never_fetches() {
        let repo = MapResolver::new();
        let block = managed(vec![
            jar("x", "y", "1.0"),
            Dependency::bom_import("bom", "gone", "1"),
        ]);

        let request = request(&repo);
        let builder = DocumentModelBuilder::new();
        let resolver = VersionResolver::new(ImportFetcher::new(&request, &builder));

        assert_eq!(
            resolver.resolve(Some(&block), &key("x", "y")).unwrap(),
            Some("1.0".to_string())
        );
        assert_eq!(repo.resolutions(), 0);
    }
}
