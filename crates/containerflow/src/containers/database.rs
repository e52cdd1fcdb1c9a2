//! Container database
//!
//! Holds the normalized containers of a single document in first-seen order.

use std::collections::HashMap;
use tracing::{trace, warn};

use crate::core::Container;

/// Ordered mapping from container name to container record
///
/// Re-adding an existing name replaces the record but keeps the position
/// of the first occurrence.
#[derive(Debug, Default, Clone)]
pub struct ContainerDatabase {
    /// Containers indexed by name
    containers: HashMap<String, Container>,
    /// Container names in insertion order
    order: Vec<String>,
}

impl ContainerDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container, replacing any earlier one with the same name
    pub fn add_container(&mut self, container: Container) {
        let name = container.name.clone();
        if self.containers.insert(name.clone(), container).is_some() {
            warn!(container = %name, "Container redefined, keeping the later record");
        } else {
            trace!(container = %name, "Added container");
            self.order.push(name);
        }
    }

    pub fn get_container(&self, name: &str) -> Option<&Container> {
        self.containers.get(name)
    }

    pub fn has_container(&self, name: &str) -> bool {
        self.containers.contains_key(name)
    }

    /// Iterate containers in insertion order
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.order
            .iter()
            .filter_map(move |name| self.containers.get(name))
    }

    /// Container names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn container_count(&self) -> usize {
        self.order.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.containers
            .values()
            .map(|container| container.relationships.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
