//! Node identifier generation
//!
//! Mermaid node and subgraph identifiers must not contain spaces or most
//! punctuation. Every identifier in a generated diagram comes from
//! [`sanitize`], scoped by the identifier of the enclosing element.

use std::collections::HashMap;

/// Characters replaced with `_` when building identifiers
const REPLACED: [char; 5] = [' ', '-', ':', '/', '.'];

/// Build a node identifier from a scope prefix and a raw name
///
/// The name is lower-cased and each space, hyphen, colon, slash and period
/// becomes `_`. A non-empty prefix is joined with `_`; everything else
/// passes through unchanged.
///
/// # Example
/// ```rust
/// use containerflow::sanitize;
///
/// assert_eq!(sanitize("", "Auth Service"), "auth_service");
/// assert_eq!(sanitize("backend", "api.v2/public"), "backend_api_v2_public");
/// ```
pub fn sanitize(prefix: &str, name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .map(|c| if REPLACED.contains(&c) { '_' } else { c })
        .collect();

    if prefix.is_empty() {
        cleaned
    } else {
        format!("{}_{}", prefix, cleaned)
    }
}

/// Mapping from container name to the node identifier it was rendered under
///
/// Filled while containers are rendered and consulted afterwards to resolve
/// relationship endpoints.
#[derive(Debug, Clone, Default)]
pub struct NodeIdTable {
    ids: HashMap<String, String>,
}

impl NodeIdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the identifier for a container, returning any previous entry
    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) -> Option<String> {
        self.ids.insert(name.into(), id.into())
    }

    /// Look up the identifier of a container by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
