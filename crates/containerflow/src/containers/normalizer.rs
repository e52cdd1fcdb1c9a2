//! Container normalizer
//!
//! Documents describe their containers either as a mapping keyed by
//! container name or as a list of records carrying a `name` field. Both
//! shapes are resolved into a [`ContainerDatabase`] before rendering.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, span, trace, warn, Level};

use super::ContainerDatabase;
use crate::core::{value_text, Container, DiagramError, Property, PropertyValue, Relationship, Result};

/// Top-level shape of a container document
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerInput {
    /// `{"Api": {...}, "Db": {...}}`
    Mapping(Map<String, Value>),
    /// `[{"name": "Api", ...}, {"name": "Db", ...}]`
    List(Vec<Value>),
}

impl ContainerInput {
    /// Classify a parsed document, or `None` for scalar documents
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(ContainerInput::Mapping(map)),
            Value::Array(items) => Some(ContainerInput::List(items)),
            _ => None,
        }
    }

    /// Resolve either shape into one ordered mapping keyed by container name
    ///
    /// List records without a `name` are dropped. A repeated name replaces
    /// the earlier record in place.
    pub fn into_mapping(self) -> Map<String, Value> {
        match self {
            ContainerInput::Mapping(map) => map,
            ContainerInput::List(items) => {
                let mut map = Map::new();
                for item in items {
                    let name = match item.as_object().and_then(|record| record.get("name")) {
                        Some(name) => value_text(name),
                        None => {
                            warn!(entry = %item, "Skipping list entry without a name");
                            continue;
                        }
                    };
                    map.insert(name, item);
                }
                map
            }
        }
    }
}

/// Raw record shape; unknown keys are ignored and `null` counts as absent
#[derive(Debug, Deserialize)]
struct ContainerRecord {
    #[serde(default)]
    name: Option<Value>,
    #[serde(rename = "type", default)]
    kind: Option<Value>,
    #[serde(default)]
    technology: Option<Value>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    relationships: Option<Vec<Value>>,
}

impl ContainerRecord {
    fn into_container(self, name: &str) -> Container {
        let properties = self.properties.map(|properties| {
            properties
                .iter()
                .map(|(key, value)| Property::new(key.clone(), PropertyValue::from(value)))
                .collect()
        });

        let relationships = self
            .relationships
            .unwrap_or_default()
            .iter()
            .filter_map(|entry| relationship_from_value(name, entry))
            .collect();

        Container {
            name: name.to_string(),
            declared_name: self.name.as_ref().map(value_text),
            kind: self.kind.as_ref().map(value_text),
            technology: self.technology.as_ref().map(value_text),
            description: self.description.as_ref().map(value_text),
            properties,
            relationships,
        }
    }
}

fn relationship_from_value(container: &str, entry: &Value) -> Option<Relationship> {
    let record = entry.as_object()?;
    match (record.get("target"), record.get("type")) {
        (Some(target), Some(kind)) => Some(Relationship::new(value_text(target), value_text(kind))),
        _ => {
            trace!(container, entry = %entry, "Skipping relationship without target and type");
            None
        }
    }
}

/// Turns parsed JSON documents into container databases
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainerNormalizer;

impl ContainerNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse JSON text and normalize it
    pub fn parse(&self, document: &str, input: &str) -> Result<ContainerDatabase> {
        let raw: Value =
            serde_json::from_str(input).map_err(|e| DiagramError::parse_error(document, e))?;
        self.normalize(document, raw)
    }

    /// Normalize an already parsed document
    ///
    /// Only mapping values that are objects with a `type` key become
    /// containers; everything else is skipped.
    pub fn normalize(&self, document: &str, raw: Value) -> Result<ContainerDatabase> {
        let normalize_span = span!(Level::DEBUG, "normalize_containers", document);
        let _enter = normalize_span.enter();

        let input = ContainerInput::from_value(raw).ok_or_else(|| {
            DiagramError::invalid_document(document, "expected a JSON object or array")
        })?;
        let shape = match input {
            ContainerInput::Mapping(_) => "mapping",
            ContainerInput::List(_) => "list",
        };

        let mut database = ContainerDatabase::new();
        for (name, value) in input.into_mapping() {
            let record = match value {
                Value::Object(record) => record,
                other => {
                    debug!(key = %name, value = %other, "Skipping non-container entry");
                    continue;
                }
            };
            if !record.contains_key("type") {
                warn!(container = %name, "Skipping entry without a type");
                continue;
            }

            let parsed: ContainerRecord = serde_json::from_value(Value::Object(record))
                .map_err(|e| DiagramError::invalid_container(name.clone(), e.to_string()))?;
            database.add_container(parsed.into_container(&name));
        }

        debug!(
            shape,
            container_count = database.container_count(),
            relationship_count = database.relationship_count(),
            "Normalized containers"
        );
        Ok(database)
    }
}
