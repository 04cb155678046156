//! File-system repository source.
//!
//! Models are looked up under one or more repository roots using the usual
//! repository layout:
//!
//! ```text
//! <root>/<groupId with '.' replaced by '/'>/<artifactId>/<version>/<artifactId>-<version>.pom.json
//! ```
//!
//! Roots are searched in order. First match wins.

use std::path::{Path, PathBuf};

use crate::core::Coordinate;
use crate::sources::{ModelResolver, ModelSource, UnresolvableModelError};

/// File extension of model documents in a repository.
pub const MODEL_EXTENSION: &str = "pom.json";

/// Resolves models from local repository directories.
#[derive(Debug, Clone, Default)]
pub struct RepositoryResolver {
    roots: Vec<PathBuf>,
}

impl RepositoryResolver {
    /// Create a resolver over the given roots, searched in order.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        RepositoryResolver { roots }
    }

    /// Path of a model inside one repository root.
    ///
    /// Fails if any part of the coordinate is not a plain path segment, so
    /// the result always stays under `root`.
    pub fn layout_path(
        root: &Path,
        coordinate: &Coordinate,
    ) -> Result<PathBuf, UnresolvableModelError> {
        let mut path = root.to_path_buf();
        for segment in coordinate.group_id.split('.') {
            path.push(plain_segment(coordinate, segment)?);
        }
        path.push(plain_segment(coordinate, &coordinate.artifact_id)?);
        path.push(plain_segment(coordinate, &coordinate.version)?);
        path.push(format!(
            "{}-{}.{}",
            coordinate.artifact_id, coordinate.version, MODEL_EXTENSION
        ));
        Ok(path)
    }
}

fn plain_segment<'a>(
    coordinate: &Coordinate,
    segment: &'a str,
) -> Result<&'a str, UnresolvableModelError> {
    let plain = !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', ':']);

    if plain {
        Ok(segment)
    } else {
        Err(UnresolvableModelError::new(
            coordinate.clone(),
            format!("`{}` is not a valid repository path segment", segment),
        ))
    }
}

impl ModelResolver for RepositoryResolver {
    fn resolve_model(&self, coordinate: &Coordinate) -> Result<ModelSource, UnresolvableModelError> {
        if self.roots.is_empty() {
            return Err(UnresolvableModelError::new(
                coordinate.clone(),
                "no repositories configured",
            ));
        }

        let mut tried = Vec::with_capacity(self.roots.len());
        for root in &self.roots {
            let candidate = Self::layout_path(root, coordinate)?;
            if candidate.is_file() {
                tracing::debug!("found {} at {}", coordinate, candidate.display());
                return Ok(ModelSource::File(candidate));
            }
            tried.push(candidate.display().to_string());
        }

        Err(UnresolvableModelError::new(
            coordinate.clone(),
            format!("not found in any repository (tried {})", tried.join(", ")),
        ))
    }
}
