//! Per-build model cache.
//!
//! The host hands every request of one build the same cache. Values are
//! opaque and partitioned by a discriminator tag, so unrelated users of the
//! cache never see each other's entries.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// An opaque cached value.
pub type CacheValue = Arc<dyn Any + Send + Sync>;

/// A cache shared by all model builds of one build invocation.
pub trait ModelCache: Send + Sync {
    /// Look up a value.
    fn get(&self, group_id: &str, artifact_id: &str, version: &str, tag: &str)
        -> Option<CacheValue>;

    /// Store a value, replacing any previous one under the same key.
    fn put(&self, group_id: &str, artifact_id: &str, version: &str, tag: &str, value: CacheValue);
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    group_id: String,
    artifact_id: String,
    version: String,
    tag: String,
}

impl CacheKey {
    fn new(group_id: &str, artifact_id: &str, version: &str, tag: &str) -> Self {
        CacheKey {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// Default in-memory cache, one per build invocation.
#[derive(Default)]
pub struct InMemoryModelCache {
    entries: RwLock<HashMap<CacheKey, CacheValue>>,
}

impl InMemoryModelCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries under a given tag.
    pub fn count_tagged(&self, tag: &str) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .keys()
            .filter(|key| key.tag == tag)
            .count()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ModelCache for InMemoryModelCache {
    fn get(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        tag: &str,
    ) -> Option<CacheValue> {
        let key = CacheKey::new(group_id, artifact_id, version, tag);
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&key)
            .cloned()
    }

    fn put(&self, group_id: &str, artifact_id: &str, version: &str, tag: &str, value: CacheValue) {
        let key = CacheKey::new(group_id, artifact_id, version, tag);
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, value);
    }
}

impl std::fmt::Debug for InMemoryModelCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryModelCache")
            .field("entries", &self.len())
            .finish()
    }
}
