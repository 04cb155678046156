//! Test utilities and mocks for pomgraft unit tests.
//!
//! This module provides stand-ins for the host collaborators a model builder
//! talks to: a model resolver that serves documents from memory, a model
//! cache that counts hits, and stub builders.
//!
//! # Example
//!
//! ```rust,ignore
//! use pomgraft::test_support::{bom, MapResolver};
//!
//! #[test]
//! fn test_example() {
//!     let mut repo = MapResolver::new();
//!     repo.add(bom("bom", "b", "1", vec![Dependency::new("x", "y").with_version("2")]));
//!
//!     // Attach `repo` to a ModelBuildingRequest...
//!     assert_eq!(repo.resolutions(), 0);
//! }
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::builder::ModelBuilder;
use crate::core::{
    Coordinate, Model, ModelBuildingRequest, ModelBuildingResult, ModelProblem, ProblemSeverity,
    RawModelResult, ValidationLevel,
};
use crate::resolver::ModelBuildingError;
use crate::sources::{
    CacheValue, InMemoryModelCache, ModelCache, ModelResolver, ModelSource,
    UnresolvableModelError,
};

// Re-export fixtures for convenience
pub use fixtures::*;

/// Model resolver serving documents from memory.
///
/// Clones share the resolution counter, so a test can hand a clone to a
/// request and still observe how often it was used.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    models: HashMap<Coordinate, String>,
    resolutions: Arc<AtomicUsize>,
}

impl MapResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `model` under its own coordinate.
    pub fn add(&mut self, model: Model) {
        let document = model
            .to_json_pretty()
            .unwrap_or_else(|e| panic!("failed to serialize {}: {}", model.coordinate(), e));
        self.models.insert(model.coordinate(), document);
    }

    /// Number of successful resolutions so far.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }
}

impl ModelResolver for MapResolver {
    fn resolve_model(&self, coordinate: &Coordinate) -> Result<ModelSource, UnresolvableModelError> {
        let document = self.models.get(coordinate).ok_or_else(|| {
            UnresolvableModelError::new(coordinate.clone(), "not served by the test resolver")
        })?;
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        Ok(ModelSource::memory(
            format!("memory:{}", coordinate),
            document.as_str(),
        ))
    }
}

/// Model cache recording hits per coordinate.
#[derive(Debug, Default)]
pub struct CountingCache {
    inner: InMemoryModelCache,
    hits: Mutex<HashMap<(String, String, String), usize>>,
}

impl CountingCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lookups that found a value for `g:a:v`, across all tags.
    pub fn hits_for(&self, group_id: &str, artifact_id: &str, version: &str) -> usize {
        let key = (
            group_id.to_string(),
            artifact_id.to_string(),
            version.to_string(),
        );
        self.hits.lock().unwrap().get(&key).copied().unwrap_or(0)
    }
}

impl ModelCache for CountingCache {
    fn get(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        tag: &str,
    ) -> Option<CacheValue> {
        let value = self.inner.get(group_id, artifact_id, version, tag)?;
        *self
            .hits
            .lock()
            .unwrap()
            .entry((
                group_id.to_string(),
                artifact_id.to_string(),
                version.to_string(),
            ))
            .or_default() += 1;
        Some(value)
    }

    fn put(&self, group_id: &str, artifact_id: &str, version: &str, tag: &str, value: CacheValue) {
        self.inner.put(group_id, artifact_id, version, tag, value);
    }
}

/// Stub builder registered under an arbitrary name.
///
/// Successful builds return an empty model; a failing builder rejects every
/// request with a build error.
#[derive(Debug, Clone)]
pub struct NamedBuilder {
    name: String,
    fail: bool,
}

impl NamedBuilder {
    /// Create a stub that succeeds.
    pub fn new(name: impl Into<String>) -> Self {
        NamedBuilder {
            name: name.into(),
            fail: false,
        }
    }

    /// Create a stub that fails every build.
    pub fn failing(name: impl Into<String>) -> Self {
        NamedBuilder {
            name: name.into(),
            fail: true,
        }
    }

    fn outcome(&self) -> Result<ModelBuildingResult, ModelBuildingError> {
        if self.fail {
            return Err(ModelBuildingError::build(
                self.name.clone(),
                vec![ModelProblem::new(
                    ProblemSeverity::Fatal,
                    "stub builder failure",
                    self.name.clone(),
                )],
            ));
        }
        Ok(ModelBuildingResult::new(Model::default()))
    }
}

impl ModelBuilder for NamedBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(
        &self,
        _request: &ModelBuildingRequest,
    ) -> Result<ModelBuildingResult, ModelBuildingError> {
        self.outcome()
    }

    fn build_with_result(
        &self,
        _request: &ModelBuildingRequest,
        _partial: ModelBuildingResult,
    ) -> Result<ModelBuildingResult, ModelBuildingError> {
        self.outcome()
    }

    fn build_raw_model(
        &self,
        _pom: &Path,
        _validation_level: ValidationLevel,
        _location_tracking: bool,
    ) -> Result<RawModelResult, ModelBuildingError> {
        self.outcome().map(|result| RawModelResult {
            model: Some(result.effective_model),
            problems: Vec::new(),
        })
    }
}

/// In-memory sink for captured log output.
#[derive(Debug, Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a debug-level subscriber installed and return its log output.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let sink = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    let output = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (value, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dependency;

    #[test]
    fn test_map_resolver_counts_resolutions() {
        let mut resolver = MapResolver::new();
        resolver.add(bom("bom", "b", "1", vec![]));
        let shared = resolver.clone();

        let source = shared
            .resolve_model(&Coordinate::new("bom", "b", "1"))
            .unwrap();
        assert_eq!(source.location(), "memory:bom:b:1");
        assert!(shared
            .resolve_model(&Coordinate::new("bom", "b", "2"))
            .is_err());

        assert_eq!(resolver.resolutions(), 1);
    }

    #[test]
    fn test_counting_cache_counts_hits_only() {
        let cache = CountingCache::new();

        assert!(cache.get("g", "a", "1", "manage").is_none());
        cache.put("g", "a", "1", "manage", Arc::new(1u8));
        assert!(cache.get("g", "a", "1", "manage").is_some());

        assert_eq!(cache.hits_for("g", "a", "1"), 1);
        assert_eq!(cache.hits_for("g", "a", "2"), 0);
    }

    #[test]
    fn test_named_builder() {
        let ok = NamedBuilder::new("ok");
        let failing = NamedBuilder::failing("broken");

        assert_eq!(ok.name(), "ok");
        assert!(ok.build(&ModelBuildingRequest::default()).is_ok());
        assert!(failing.build(&ModelBuildingRequest::default()).is_err());
    }

    #[test]
    fn test_capture_logs() {
        let (value, logs) = capture_logs(|| {
            tracing::warn!("unmanaged {}", Dependency::new("x", "y").key());
            42
        });

        assert_eq!(value, 42);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("unmanaged x:y:null:null"));
    }
}
