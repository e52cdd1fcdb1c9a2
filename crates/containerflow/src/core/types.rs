//! Core type definitions for container diagrams
//!
//! This module contains the normalized container model that every input
//! shape is reduced to before rendering.

use serde_json::Value;
use std::fmt;

/// Group label used when a container does not declare a type
pub const DEFAULT_CONTAINER_TYPE: &str = "resource";

/// Render a JSON value as diagram text
///
/// Strings are written without quotes; every other value uses its compact
/// JSON form (`8080`, `true`, `null`, `[1,2]`).
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Value of a single entry in a container's `properties` mapping
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A string, number, boolean or null
    Scalar(String),
    /// A sequence, kept as the text of each element
    List(Vec<String>),
    /// A nested mapping such as environment variables
    Map(Vec<(String, String)>),
}

impl From<&Value> for PropertyValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Object(map) => PropertyValue::Map(
                map.iter()
                    .map(|(key, inner)| (key.clone(), value_text(inner)))
                    .collect(),
            ),
            Value::Array(items) => PropertyValue::List(items.iter().map(value_text).collect()),
            scalar => PropertyValue::Scalar(value_text(scalar)),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Scalar(text) => write!(f, "{}", text),
            PropertyValue::List(items) => write!(f, "{}", items.join(", ")),
            PropertyValue::Map(entries) => {
                let pairs: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect();
                write!(f, "{}", pairs.join(", "))
            }
        }
    }
}

/// A named entry of a container's `properties` block
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(key: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A directed relationship to another container of the same document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Name of the target container
    pub target: String,
    /// Relationship type as written, e.g. `depends_on`
    pub kind: String,
}

impl Relationship {
    pub fn new(target: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind: kind.into(),
        }
    }

    /// Edge label: the type with underscores turned into spaces
    pub fn label(&self) -> String {
        self.kind.replace('_', " ")
    }
}

/// A normalized container record
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    /// Key the container is addressed by (mapping key or `name` field)
    pub name: String,
    /// The record's own `name` field, when present
    pub declared_name: Option<String>,
    pub kind: Option<String>,
    pub technology: Option<String>,
    pub description: Option<String>,
    /// `None` when the record has no `properties` block at all
    pub properties: Option<Vec<Property>>,
    pub relationships: Vec<Relationship>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties
            .get_or_insert_with(Vec::new)
            .push(Property::new(key, value));
        self
    }

    pub fn with_relationship(mut self, target: impl Into<String>, kind: impl Into<String>) -> Self {
        self.relationships.push(Relationship::new(target, kind));
        self
    }

    /// Type shown in the group label
    pub fn display_kind(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_CONTAINER_TYPE)
    }

    /// Group label, e.g. `Auth Service (service)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.display_kind())
    }

    /// Descriptive fields in rendering order, skipping absent ones
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("name", self.declared_name.as_deref()),
            ("type", self.kind.as_deref()),
            ("technology", self.technology.as_deref()),
            ("description", self.description.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}
