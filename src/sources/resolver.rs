//! ModelResolver trait - maps coordinates to model sources.

use thiserror::Error;

use crate::core::Coordinate;
use crate::sources::ModelSource;

/// A coordinate could not be turned into a model source.
#[derive(Debug, Clone, Error)]
#[error("unable to resolve model `{coordinate}`: {reason}")]
pub struct UnresolvableModelError {
    pub coordinate: Coordinate,
    pub reason: String,
}

impl UnresolvableModelError {
    pub fn new(coordinate: Coordinate, reason: impl Into<String>) -> Self {
        UnresolvableModelError {
            coordinate,
            reason: reason.into(),
        }
    }
}

/// Resolves a `groupId:artifactId:version` to the source of its model.
///
/// Implementations may perform blocking I/O (repository lookups, downloads).
/// Cancellation is expressed by failing fast with an error.
pub trait ModelResolver: Send + Sync {
    /// Resolve a coordinate to a model source.
    fn resolve_model(&self, coordinate: &Coordinate) -> Result<ModelSource, UnresolvableModelError>;
}
