//! Model sources - where a model document is read from.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// A readable model document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A document on disk
    File(PathBuf),

    /// A document held in memory, labelled with a location for messages
    Memory {
        location: String,
        content: Arc<str>,
    },
}

impl ModelSource {
    /// Create a file-backed source.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ModelSource::File(path.into())
    }

    /// Create an in-memory source.
    pub fn memory(location: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        ModelSource::Memory {
            location: location.into(),
            content: content.into(),
        }
    }

    /// Human-readable location of the document.
    pub fn location(&self) -> String {
        match self {
            ModelSource::File(path) => path.display().to_string(),
            ModelSource::Memory { location, .. } => location.clone(),
        }
    }

    /// Read the document text.
    pub fn read(&self) -> std::io::Result<String> {
        match self {
            ModelSource::File(path) => std::fs::read_to_string(path),
            ModelSource::Memory { content, .. } => Ok(content.to_string()),
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_source() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pom.json");
        std::fs::write(&path, "{}").unwrap();

        let source = ModelSource::file(&path);
        assert_eq!(source.read().unwrap(), "{}");
        assert!(matches!(&source, ModelSource::File(p) if *p == path));
    }

    #[test]
    fn test_read_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        let source = ModelSource::file(tmp.path().join("absent.pom.json"));
        assert!(source.read().is_err());
    }

    #[test]
    fn test_memory_source() {
        let source = ModelSource::memory("bom:b:1", r#"{"groupId":"bom"}"#);
        assert_eq!(source.location(), "bom:b:1");
        assert_eq!(source.to_string(), "bom:b:1");
        assert!(matches!(source, ModelSource::Memory { .. }));
        assert!(source.read().unwrap().contains("bom"));
    }
}
