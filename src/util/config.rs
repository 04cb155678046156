//! Configuration file support for pomgraft.
//!
//! pomgraft supports two configuration file locations:
//! - Global: `<config dir>/pomgraft/config.toml` - User-wide defaults
//! - Project: `.pomgraft/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Command-line flags
//! take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::ValidationLevel;

/// pomgraft configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model repository settings
    pub repository: RepositoryConfig,

    /// Model building settings
    pub build: BuildConfig,

    /// Logging settings
    pub log: LogConfig,
}

/// Model repositories to resolve import poms from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Repository roots, searched in order
    pub paths: Vec<PathBuf>,
}

/// Model building settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuildConfig {
    /// Validation level (minimal, strict)
    pub validation: Option<ValidationLevel>,

    /// Track input locations of model elements
    pub location_tracking: Option<bool>,
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `pomgraft=debug`
    pub filter: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if !other.repository.paths.is_empty() {
            self.repository.paths = other.repository.paths;
        }

        if other.build.validation.is_some() {
            self.build.validation = other.build.validation;
        }
        if other.build.location_tracking.is_some() {
            self.build.location_tracking = other.build.location_tracking;
        }

        if other.log.filter.is_some() {
            self.log.filter = other.log.filter;
        }
    }

    /// Effective validation level.
    pub fn validation_level(&self) -> ValidationLevel {
        self.build.validation.unwrap_or_default()
    }

    /// Whether location tracking is enabled.
    pub fn location_tracking(&self) -> bool {
        self.build.location_tracking.unwrap_or(false)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.pomgraft/config.toml)
/// 2. Global config (<config dir>/pomgraft/config.toml)
/// 3. Defaults
///
/// Missing files are skipped. A file that exists but cannot be read or
/// parsed contributes nothing; its error is returned alongside the merged
/// config so the caller can report it once logging is up.
pub fn load_config(
    global_path: Option<&Path>,
    project_path: &Path,
) -> (Config, Vec<anyhow::Error>) {
    let mut config = Config::default();
    let mut errors = Vec::new();

    // Project config overrides global
    for path in global_path.into_iter().chain(std::iter::once(project_path)) {
        if !path.exists() {
            continue;
        }
        match Config::load(path) {
            Ok(loaded) => config.merge(loaded),
            Err(e) => errors.push(e),
        }
    }

    (config, errors)
}

/// Get the global pomgraft config path.
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "pomgraft", "pomgraft")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Get the project config path (.pomgraft/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".pomgraft").join("config.toml")
}
