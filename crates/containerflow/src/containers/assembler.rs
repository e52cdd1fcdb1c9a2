//! Diagram assembler
//!
//! Coordinates the pipeline for a whole collection of documents:
//! Document → Normalizer → Container Renderer → Relationship Renderer → text

use tracing::{debug, info, span, Level};

use super::{ContainerNormalizer, ContainerRenderer, Document, RelationshipRenderer};
use crate::core::{sanitize, DiagramError, DiagramWriter, Result};

/// Flow direction written in the diagram header
pub const FLOW_DIRECTION: &str = "TD";

/// Class applied to the outer collection group
pub const TOP_LEVEL_CLASS: &str = "topLevel";

/// Class applied to each document group
pub const SECOND_LEVEL_CLASS: &str = "secondLevel";

/// Style classes declared at the top of every diagram
pub const STYLE_CLASSES: [(&str, &str); 3] = [
    (TOP_LEVEL_CLASS, "fill:#e6f3ff,stroke:#2980b9,stroke-width:2px"),
    (SECOND_LEVEL_CLASS, "fill:#f5f5f5,stroke:#34495e,stroke-width:1px"),
    ("default", "fill:#ffffff,stroke:#7f8c8d,stroke-width:1px"),
];

/// Summary of one assembled diagram
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramStats {
    pub documents: usize,
    pub containers: usize,
    pub relationships: usize,
}

/// Assembles documents into a single flowchart
///
/// Each document becomes a group inside the outer collection group; its
/// containers are rendered first and its relationships after them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiagramAssembler {
    normalizer: ContainerNormalizer,
    container_renderer: ContainerRenderer,
    relationship_renderer: RelationshipRenderer,
}

impl DiagramAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the documents of a collection into diagram text
    pub fn assemble(&self, collection: &str, documents: &[Document]) -> Result<String> {
        self.assemble_with_stats(collection, documents)
            .map(|(text, _)| text)
    }

    /// Assemble the documents and report what was rendered
    pub fn assemble_with_stats(
        &self,
        collection: &str,
        documents: &[Document],
    ) -> Result<(String, DiagramStats)> {
        let assemble_span = span!(
            Level::INFO,
            "assemble_diagram",
            collection,
            document_count = documents.len()
        );
        let _enter = assemble_span.enter();

        if documents.is_empty() {
            return Err(DiagramError::no_input(None));
        }

        info!("Starting diagram assembly");

        let mut writer = DiagramWriter::flowchart(FLOW_DIRECTION);
        writer.comment("Styling");
        for (name, style) in STYLE_CLASSES {
            writer.class_def(name, style);
        }

        writer.open_classed_group(&sanitize("", collection), TOP_LEVEL_CLASS);

        let mut stats = DiagramStats::default();
        for document in documents {
            self.assemble_document(document, &mut writer, &mut stats)?;
        }

        writer.close_group()?;
        let text = writer.finish()?;

        info!(
            documents = stats.documents,
            containers = stats.containers,
            relationships = stats.relationships,
            "Diagram assembly completed"
        );
        Ok((text, stats))
    }

    fn assemble_document(
        &self,
        document: &Document,
        writer: &mut DiagramWriter,
        stats: &mut DiagramStats,
    ) -> Result<()> {
        let document_span = span!(
            Level::DEBUG,
            "assemble_document",
            document = document.file_name(),
            group = document.group_id()
        );
        let _enter = document_span.enter();

        let database = self
            .normalizer
            .parse(document.file_name(), document.content())?;

        writer.open_classed_group(document.group_id(), SECOND_LEVEL_CLASS);
        let ids = self
            .container_renderer
            .render(&database, document.group_id(), writer)?;
        let edges = self.relationship_renderer.render(
            document.display_name(),
            &database,
            &ids,
            writer,
        )?;
        writer.close_group()?;

        debug!(
            container_count = database.container_count(),
            edge_count = edges,
            "Document assembled"
        );
        stats.documents += 1;
        stats.containers += database.container_count();
        stats.relationships += edges;
        Ok(())
    }
}
