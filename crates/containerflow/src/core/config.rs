//! Generator configuration
//!
//! The root folder is always supplied by the caller. It names the outer
//! diagram group, is searched for `*.json` documents, and receives the
//! saved diagram.

use std::path::{Path, PathBuf};

/// Suffix appended to the folder name for the default output file
pub const OUTPUT_SUFFIX: &str = "_diagram.mmd";

/// Collection name used when the root path has no usable final component
pub const FALLBACK_FOLDER_NAME: &str = "diagram";

/// Configuration for a [`crate::DiagramGenerator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    root: PathBuf,
    output_name: Option<String>,
}

impl GeneratorConfig {
    /// Create a configuration rooted at the given folder
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_name: None,
        }
    }

    /// Override the default `<folder>_diagram.mmd` output file name
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    /// Final component of the root folder
    ///
    /// Paths such as `.` are canonicalized first; when no name can be
    /// found the fallback `diagram` is used.
    pub fn folder_name(&self) -> String {
        if let Some(name) = self.root.file_name() {
            return name.to_string_lossy().into_owned();
        }
        self.root
            .canonicalize()
            .ok()
            .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| FALLBACK_FOLDER_NAME.to_string())
    }

    /// Output file name, explicit or derived from the folder name
    pub fn resolved_output_name(&self) -> String {
        match &self.output_name {
            Some(name) => name.clone(),
            None => format!("{}{}", self.folder_name(), OUTPUT_SUFFIX),
        }
    }

    /// Full path the diagram is saved to
    pub fn output_path(&self) -> PathBuf {
        self.root.join(self.resolved_output_name())
    }
}
