//! Artifact coordinates.
//!
//! A [`CoordinateKey`] identifies an artifact family independent of version:
//! `(groupId, artifactId, type, classifier)`. A [`Coordinate`] identifies a
//! concrete model (`groupId:artifactId:version`) and is what models, plugins
//! and cache entries are keyed by.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a dependency independent of its version.
///
/// Equality is structural over the raw field values. No defaults are applied:
/// a key with `type = None` is distinct from one with `type = Some("jar")`.
/// An absent classifier is always `None`, so "null" and "absent" compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateKey {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub classifier: Option<String>,
}

impl CoordinateKey {
    /// Create a key from its four parts.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        type_: Option<&str>,
        classifier: Option<&str>,
    ) -> Self {
        CoordinateKey {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            type_: type_.map(str::to_string),
            classifier: classifier.map(str::to_string),
        }
    }
}

/// Canonical `G:A:T:C` form; missing parts render as `null`.
impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id,
            self.artifact_id,
            self.type_.as_deref().unwrap_or("null"),
            self.classifier.as_deref().unwrap_or("null")
        )
    }
}

/// A `groupId:artifactId:version` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Coordinate {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
