//! Containerflow - Turn JSON container descriptions into Mermaid flowcharts
//!
//! Each JSON document in a folder describes architectural containers
//! (services, databases, queues) with a type, technology, properties and
//! relationships. Containerflow renders the whole folder as one
//! `flowchart TD` diagram: one group per document, one nested group per
//! container, and labelled links for relationships.
//!
//! # Quick Start
//!
//! ```rust
//! use containerflow::{generate, Document};
//!
//! let doc = Document::from_json_str(
//!     "backend.json",
//!     r#"{
//!         "Api": {"type": "service", "relationships": [{"target": "Db", "type": "reads_from"}]},
//!         "Db": {"type": "database"}
//!     }"#,
//! );
//! let diagram = generate("platform", &[doc]).unwrap();
//! assert!(diagram.contains("backend_api ---|reads from| backend_db"));
//! ```
//!
//! # Working With Folders
//!
//! ```no_run
//! use containerflow::{DiagramGenerator, GeneratorConfig};
//!
//! let generator = DiagramGenerator::new(GeneratorConfig::new("docs/architecture"));
//! let (diagram, path) = generator.save_diagram(None)?;
//! println!("wrote {} bytes to {}", diagram.len(), path.display());
//! # Ok::<(), containerflow::DiagramError>(())
//! ```

pub mod containers;
pub mod core;

pub use crate::containers::*;
pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::containers::{
        ContainerDatabase, ContainerNormalizer, ContainerRenderer, DiagramAssembler,
        DiagramGenerator, Document, RelationshipRenderer,
    };
    pub use crate::core::{
        sanitize, Container, DiagramError, DiagramWriter, GeneratorConfig, NodeIdTable,
        PropertyValue, Relationship,
    };
}

/// Render a set of documents as one diagram
///
/// `collection` names the outer group; it is sanitized like any other
/// identifier.
///
/// # Example
/// ```rust
/// use containerflow::{generate, Document};
///
/// let doc = Document::from_json_str("shop.json", r#"[{"name": "Cart", "type": "service"}]"#);
/// let diagram = generate("retail", &[doc]).unwrap();
/// assert!(diagram.starts_with("flowchart TD"));
/// assert!(diagram.contains("Cart (service)"));
/// ```
pub fn generate(collection: &str, documents: &[Document]) -> Result<String> {
    DiagramAssembler::new().assemble(collection, documents)
}

/// Normalize one JSON document without rendering it
///
/// # Example
/// ```rust
/// use containerflow::normalize;
///
/// let db = normalize("inline", r#"{"Api": {"type": "service"}, "version": 2}"#).unwrap();
/// assert_eq!(db.container_count(), 1);
/// ```
pub fn normalize(document: &str, input: &str) -> Result<ContainerDatabase> {
    ContainerNormalizer::new().parse(document, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_single_document() {
        let doc = Document::from_json_str("core.json", r#"{"Api": {"type": "service"}}"#);
        let output = generate("system", &[doc]).unwrap();
        assert!(output.contains(r#"subgraph core_api["Api (service)"]"#));
    }

    #[test]
    fn test_generate_requires_documents() {
        assert!(matches!(
            generate("system", &[]),
            Err(DiagramError::NoInput { .. })
        ));
    }

    #[test]
    fn test_normalize_list_shape() {
        let db = normalize("inline", r#"[{"name": "A", "type": "x"}, {"name": "B"}]"#).unwrap();
        assert_eq!(db.container_count(), 1);
    }
}
