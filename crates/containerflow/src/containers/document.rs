//! Input documents
//!
//! A document is one JSON source. Its file stem gives the display name used
//! for the per-document group, and the sanitized display name becomes the
//! identifier scope of every container inside it.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use tracing::{debug, trace};

use crate::core::{sanitize, DiagramError, Result};

/// One JSON input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    file_name: String,
    display_name: String,
    group_id: String,
    content: String,
}

impl Document {
    /// Create a document from a file name and its JSON text
    ///
    /// # Example
    /// ```rust
    /// use containerflow::Document;
    ///
    /// let doc = Document::from_json_str("payment-service.json", "{}");
    /// assert_eq!(doc.display_name(), "Payment Service");
    /// assert_eq!(doc.group_id(), "payment_service");
    /// ```
    pub fn from_json_str(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let display_name = display_name(file_stem(&file_name));
        let group_id = sanitize("", &display_name);
        Self {
            file_name,
            display_name,
            group_id,
            content: content.into(),
        }
    }

    /// Read a document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        trace!(path = %path.display(), bytes = content.len(), "Read document");
        Ok(Self::from_json_str(file_name, content))
    }

    /// File name the document was created from, e.g. `payment-service.json`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Title-cased stem, e.g. `Payment Service`
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Sanitized display name, e.g. `payment_service`
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Raw JSON text
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// List the `*.json` files directly inside `root`, sorted by file name
pub fn discover_paths(root: &Path) -> Result<Vec<PathBuf>> {
    let escaped = Pattern::escape(&root.to_string_lossy());
    let pattern = Path::new(&escaped).join("*.json");
    let pattern = pattern.to_string_lossy();

    let mut paths = Vec::new();
    let entries = glob(&pattern).map_err(|e| DiagramError::discovery_error(e.to_string()))?;
    for entry in entries {
        let path = entry.map_err(|e| DiagramError::discovery_error(e.to_string()))?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!(root = %root.display(), document_count = paths.len(), "Discovered documents");
    Ok(paths)
}

/// Load every `*.json` document directly inside `root`
pub fn discover_documents(root: &Path) -> Result<Vec<Document>> {
    discover_paths(root)?
        .iter()
        .map(Document::from_path)
        .collect()
}

fn file_stem(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
}

/// Turn a file stem into a group title: hyphens become spaces and each
/// alphabetic run is capitalized with the rest lower-cased
fn display_name(stem: &str) -> String {
    let mut title = String::with_capacity(stem.len());
    let mut in_word = false;
    for c in stem.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(c);
            in_word = false;
        }
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("payment-service"), "Payment Service");
        assert_eq!(display_name("AUTH"), "Auth");
        assert_eq!(display_name("core_api-v2x"), "Core_Api V2X");
    }

    #[test]
    fn test_group_id_from_display_name() {
        let doc = Document::from_json_str("order-flow.json", "[]");
        assert_eq!(doc.file_name(), "order-flow.json");
        assert_eq!(doc.display_name(), "Order Flow");
        assert_eq!(doc.group_id(), "order_flow");
        assert_eq!(doc.content(), "[]");
    }

    #[test]
    fn test_name_without_extension() {
        let doc = Document::from_json_str("inventory", "{}");
        assert_eq!(doc.display_name(), "Inventory");
    }

    #[test]
    fn test_from_path_reads_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edge-gateway.json");
        fs::write(&path, r#"{"Gateway": {"type": "proxy"}}"#).unwrap();

        let doc = Document::from_path(&path).unwrap();
        assert_eq!(doc.file_name(), "edge-gateway.json");
        assert_eq!(doc.display_name(), "Edge Gateway");
        assert!(doc.content().contains("Gateway"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempdir().unwrap();
        let result = Document::from_path(dir.path().join("missing.json"));
        assert!(matches!(result, Err(DiagramError::IoError { .. })));
    }

    #[test]
    fn test_discover_sorted_json_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(dir.path().join("old_diagram.mmd"), "ignored").unwrap();

        let docs = discover_documents(dir.path()).unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.file_name()).collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_discover_empty_folder() {
        let dir = tempdir().unwrap();
        assert!(discover_documents(dir.path()).unwrap().is_empty());
    }
}
