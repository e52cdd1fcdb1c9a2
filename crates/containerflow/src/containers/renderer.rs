//! Container renderer
//!
//! Writes each container as a `subgraph` holding one leaf per descriptive
//! field and, when present, a nested `Properties` group.

use tracing::{span, trace, Level};

use super::ContainerDatabase;
use crate::core::{sanitize, Container, DiagramWriter, NodeIdTable, Property, PropertyValue, Result};

/// Renders containers into a [`DiagramWriter`]
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainerRenderer;

impl ContainerRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render every container of a document, returning the name → id table
    pub fn render(
        &self,
        database: &ContainerDatabase,
        document_id: &str,
        writer: &mut DiagramWriter,
    ) -> Result<NodeIdTable> {
        let mut ids = NodeIdTable::new();
        for container in database.containers() {
            let id = self.render_container(container, document_id, writer)?;
            ids.insert(container.name.clone(), id);
        }
        Ok(ids)
    }

    /// Render one container and return its node identifier
    pub fn render_container(
        &self,
        container: &Container,
        document_id: &str,
        writer: &mut DiagramWriter,
    ) -> Result<String> {
        let container_id = sanitize(document_id, &container.name);
        let render_span = span!(Level::TRACE, "render_container", id = %container_id);
        let _enter = render_span.enter();

        // Leaf ids are scoped by the raw container name, not its id
        let scope = format!("{}_{}", document_id, container.name);
        let scope = scope.as_str();

        writer.open_group(&container_id, &container.label());
        for (key, value) in container.fields() {
            writer.node(&sanitize(scope, key), &format!("{}: {}", key, value));
        }

        if let Some(properties) = &container.properties {
            writer.open_titled_group(&sanitize(scope, "properties"), "Properties");
            for property in properties {
                self.render_property(property, scope, writer);
            }
            writer.close_group()?;
            trace!(property_count = properties.len(), "Rendered properties");
        }

        writer.close_group()?;
        Ok(container_id)
    }

    fn render_property(&self, property: &Property, scope: &str, writer: &mut DiagramWriter) {
        let key = &property.key;
        match &property.value {
            PropertyValue::Map(entries) => {
                for (inner_key, inner_value) in entries {
                    writer.node(
                        &sanitize(scope, &format!("{}_{}", key, inner_key)),
                        &format!("{}: {}={}", key, inner_key, inner_value),
                    );
                }
            }
            value @ (PropertyValue::List(_) | PropertyValue::Scalar(_)) => {
                writer.node(&sanitize(scope, key), &format!("{}: {}", key, value));
            }
        }
    }
}
