//! Dependency declarations.
//!
//! A Dependency is a coordinate key plus optional version and scope, as it
//! appears in a plugin's `dependencies` list or in a `dependencyManagement`
//! block.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::coordinate::{Coordinate, CoordinateKey};

/// Scope value marking a management entry as a BOM import.
pub const SCOPE_IMPORT: &str = "import";

/// Type value required on a BOM import entry.
pub const TYPE_POM: &str = "pom";

/// A dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Group identifier
    pub group_id: String,

    /// Artifact identifier
    pub artifact_id: String,

    /// Version; `None` means versionless
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Packaging type, as written (no default applied)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Classifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,

    /// Scope (`compile`, `import`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Fields this crate does not interpret (`optional`, `exclusions`, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Dependency {
    /// Create a versionless dependency with no type, classifier or scope.
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Dependency {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            type_: None,
            classifier: None,
            scope: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the packaging type.
    pub fn with_type(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    /// Set the classifier.
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Create a `scope=import, type=pom` management entry.
    pub fn bom_import(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Dependency::new(group_id, artifact_id)
            .with_version(version)
            .with_type(TYPE_POM)
            .with_scope(SCOPE_IMPORT)
    }

    /// The version-independent identity of this dependency.
    pub fn key(&self) -> CoordinateKey {
        CoordinateKey {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            type_: self.type_.clone(),
            classifier: self.classifier.clone(),
        }
    }

    /// Check whether this dependency's key equals `key`.
    pub fn matches(&self, key: &CoordinateKey) -> bool {
        self.group_id == key.group_id
            && self.artifact_id == key.artifact_id
            && self.type_ == key.type_
            && self.classifier == key.classifier
    }

    /// The `groupId:artifactId:version` of this dependency, if it has a version.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.version
            .as_ref()
            .map(|v| Coordinate::new(&self.group_id, &self.artifact_id, v))
    }

    /// Check if a version is declared.
    pub fn has_version(&self) -> bool {
        self.version.is_some()
    }

    /// Check if this is a `scope=import, type=pom` management entry.
    pub fn is_bom_import(&self) -> bool {
        self.scope.as_deref() == Some(SCOPE_IMPORT) && self.type_.as_deref() == Some(TYPE_POM)
    }

    /// Fill in a missing version.
    ///
    /// Returns `false` and leaves the dependency untouched when a version is
    /// already present.
    pub fn fill_version(&mut self, version: impl Into<String>) -> bool {
        if self.version.is_some() {
            return false;
        }
        self.version = Some(version.into());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_version_and_scope() {
        let managed = Dependency::new("x", "y")
            .with_type("jar")
            .with_version("1.2.3")
            .with_scope("test");
        let plugin_dep = Dependency::new("x", "y").with_type("jar");

        assert_eq!(managed.key(), plugin_dep.key());
        assert!(managed.matches(&plugin_dep.key()));
    }

    #[test]
    fn test_bom_import_detection() {
        assert!(Dependency::bom_import("bom", "b", "1").is_bom_import());
        assert!(!Dependency::new("bom", "b").with_type("pom").is_bom_import());
        assert!(!Dependency::new("bom", "b").with_scope("import").is_bom_import());
    }

    #[test]
    fn test_fill_version_does_not_overwrite() {
        let mut dep = Dependency::new("x", "y").with_version("1.0");
        assert!(!dep.fill_version("2.0"));
        assert_eq!(dep.version.as_deref(), Some("1.0"));

        let mut versionless = Dependency::new("x", "y");
        assert!(versionless.fill_version("2.0"));
        assert_eq!(versionless.version.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_json_field_names() {
        let dep: Dependency = serde_json::from_str(
            r#"{"groupId":"bom","artifactId":"b","version":"1","type":"pom","scope":"import"}"#,
        )
        .unwrap();

        assert!(dep.is_bom_import());
        assert_eq!(dep.coordinate().unwrap().to_string(), "bom:b:1");
        assert_eq!(dep.classifier, None);
    }
}
