//! Relationship renderer
//!
//! Emits one labelled link per declared relationship, after all container
//! groups of the document have been written.

use tracing::{debug, trace};

use super::ContainerDatabase;
use crate::core::{DiagramError, DiagramWriter, NodeIdTable, Result};

/// Comment written ahead of a document's relationship links
pub const RELATIONSHIPS_COMMENT: &str = "Relationships";

/// Renders relationship links into a [`DiagramWriter`]
#[derive(Debug, Default, Clone, Copy)]
pub struct RelationshipRenderer;

impl RelationshipRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Write the relationship links of a document
    ///
    /// Every target must name a container of the same document; the first
    /// unknown target aborts with [`DiagramError::RelationshipTarget`].
    pub fn render(
        &self,
        document: &str,
        database: &ContainerDatabase,
        ids: &NodeIdTable,
        writer: &mut DiagramWriter,
    ) -> Result<usize> {
        writer.comment(RELATIONSHIPS_COMMENT);

        let mut edge_count = 0;
        for container in database.containers() {
            for relationship in &container.relationships {
                let source_id = ids.get(&container.name).ok_or_else(|| {
                    DiagramError::render_error(format!(
                        "container '{}' has no rendered identifier",
                        container.name
                    ))
                })?;
                let target_id = ids.get(&relationship.target).ok_or_else(|| {
                    DiagramError::relationship_target(
                        document,
                        container.name.clone(),
                        relationship.target.clone(),
                    )
                })?;

                trace!(
                    source = source_id,
                    target = target_id,
                    kind = %relationship.kind,
                    "Rendering relationship"
                );
                writer.edge(source_id, &relationship.label(), target_id);
                edge_count += 1;
            }
        }

        debug!(document, edge_count, "Rendered relationships");
        Ok(edge_count)
    }
}
