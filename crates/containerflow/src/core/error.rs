//! Core error types for diagram generation
//!
//! This module defines the error types used throughout the generation pipeline,
//! from reading documents to writing the finished diagram.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, DiagramError>;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum DiagramError {
    /// No documents to render; `root` is the folder searched, if any
    #[error("{}", no_input_message(.root))]
    NoInput { root: Option<PathBuf> },

    #[error("Parse error in document '{document}': {source}")]
    ParseError {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid document '{document}': {message}")]
    InvalidDocument { document: String, message: String },

    #[error("Invalid container '{container}': {message}")]
    InvalidContainer { container: String, message: String },

    #[error(
        "Relationship target '{target}' of container '{container}' not found in document '{document}'"
    )]
    RelationshipTarget {
        document: String,
        container: String,
        target: String,
    },

    #[error("Failed to write diagram to '{}': {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Discovery error: {message}")]
    DiscoveryError { message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

fn no_input_message(root: &Option<PathBuf>) -> String {
    match root {
        Some(root) => format!("No JSON files found in {}", root.display()),
        None => "No documents to render".to_string(),
    }
}

impl DiagramError {
    /// Create a new no-input error, optionally naming the folder searched
    pub fn no_input(root: Option<PathBuf>) -> Self {
        Self::NoInput { root }
    }

    /// Create a new parse error for the named document
    pub fn parse_error(document: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ParseError {
            document: document.into(),
            source,
        }
    }

    /// Create a new invalid document error
    pub fn invalid_document(document: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            document: document.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid container error
    pub fn invalid_container(container: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidContainer {
            container: container.into(),
            message: message.into(),
        }
    }

    /// Create a new missing relationship target error
    pub fn relationship_target(
        document: impl Into<String>,
        container: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::RelationshipTarget {
            document: document.into(),
            container: container.into(),
            target: target.into(),
        }
    }

    /// Create a new write error for the given output path
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Create a new discovery error
    pub fn discovery_error(message: impl Into<String>) -> Self {
        Self::DiscoveryError {
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render_error(message: impl Into<String>) -> Self {
        Self::RenderError {
            message: message.into(),
        }
    }
}
