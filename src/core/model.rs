//! Effective model documents.
//!
//! The model mirrors the subset of a POM the plugin-dependency manager reads
//! and writes: identity, `build.plugins`, `build.pluginManagement.plugins` and
//! `dependencyManagement`. Every other field is carried through untouched in
//! the `extra` maps so a document survives a read/write cycle.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::coordinate::Coordinate;
use crate::core::dependency::Dependency;

/// An effective model: a POM after inheritance and interpolation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(default)]
    pub group_id: String,

    #[serde(default)]
    pub artifact_id: String,

    #[serde(default)]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<Build>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_management: Option<DependencyManagement>,

    /// Fields this crate does not interpret
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The `build` section of a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    #[serde(default)]
    pub plugins: Vec<Plugin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_management: Option<PluginManagement>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The `build.pluginManagement` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManagement {
    #[serde(default)]
    pub plugins: Vec<Plugin>,
}

/// A plugin declaration together with its own dependencies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    #[serde(default)]
    pub group_id: String,

    #[serde(default)]
    pub artifact_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub dependencies: Vec<Dependency>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// An ordered block of managed dependencies.
///
/// Order matters: lookups return the first matching entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyManagement {
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Model {
    /// Create an empty model with the given identity.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Model {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Decode a model from its JSON document form.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Encode the model as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The model's own `groupId:artifactId:version`.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group_id, &self.artifact_id, &self.version)
    }

    /// Set the dependency management entries.
    pub fn with_managed(mut self, dependencies: Vec<Dependency>) -> Self {
        self.dependency_management = Some(DependencyManagement { dependencies });
        self
    }

    /// Append a plugin to `build.plugins`, creating the build section.
    pub fn with_plugin(mut self, plugin: Plugin) -> Self {
        self.build.get_or_insert_with(Build::default).plugins.push(plugin);
        self
    }

    /// Append a plugin to `build.pluginManagement.plugins`.
    pub fn with_managed_plugin(mut self, plugin: Plugin) -> Self {
        self.build
            .get_or_insert_with(Build::default)
            .plugin_management
            .get_or_insert_with(PluginManagement::default)
            .plugins
            .push(plugin);
        self
    }

    /// Iterate all plugin dependencies: `build.plugins` first, then
    /// `build.pluginManagement.plugins`.
    pub fn plugin_dependencies(&self) -> impl Iterator<Item = (&Plugin, &Dependency)> + '_ {
        self.build
            .iter()
            .flat_map(|build| {
                build.plugins.iter().chain(
                    build
                        .plugin_management
                        .iter()
                        .flat_map(|pm| pm.plugins.iter()),
                )
            })
            .flat_map(|plugin| plugin.dependencies.iter().map(move |dep| (plugin, dep)))
    }
}

impl Plugin {
    /// Create a plugin declaration without a version.
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Plugin {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }

    /// Set the plugin version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Append a plugin dependency.
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

/// `groupId:artifactId:version`, with `null` for a missing version.
impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group_id,
            self.artifact_id,
            self.version.as_deref().unwrap_or("null")
        )
    }
}
