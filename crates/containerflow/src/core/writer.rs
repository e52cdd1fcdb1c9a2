//! Line-oriented Mermaid flowchart writer
//!
//! Collects diagram lines while tracking `subgraph`/`end` nesting so that
//! indentation follows the group structure and unbalanced output is caught
//! before it is returned.

use std::collections::HashSet;
use tracing::warn;

use super::{DiagramError, Result};

const INDENT: &str = "    ";

/// Escape a node or group label for use inside `["..."]`
pub fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

/// Escape an edge label for use inside `|...|`
pub fn escape_edge_label(label: &str) -> String {
    label.replace('|', "#124;")
}

/// Accumulates the lines of a flowchart diagram
///
/// Each open group indents its contents by four spaces. A group's optional
/// `class` assignment is written at the group's own indentation.
#[derive(Debug, Default)]
pub struct DiagramWriter {
    lines: Vec<String>,
    depth: usize,
    base_depth: usize,
    seen_ids: HashSet<String>,
}

impl DiagramWriter {
    /// Create an empty writer without a header
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that starts with a `flowchart <direction>` header
    pub fn flowchart(direction: &str) -> Self {
        let mut writer = Self::new();
        writer.push(format!("flowchart {}", direction));
        writer.depth = 1;
        writer.base_depth = 1;
        writer
    }

    /// Current indentation level
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of groups opened and not yet closed
    pub fn open_groups(&self) -> usize {
        self.depth - self.base_depth
    }

    /// Lines written so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write a `%%` comment line
    pub fn comment(&mut self, text: &str) {
        self.push(format!("%% {}", text));
    }

    /// Write a `classDef` style declaration
    pub fn class_def(&mut self, name: &str, style: &str) {
        self.push(format!("classDef {} {}", name, style));
    }

    /// Open `subgraph <id>["<label>"]`
    pub fn open_group(&mut self, id: &str, label: &str) {
        self.register(id);
        self.push(format!("subgraph {}[\"{}\"]", id, escape_label(label)));
        self.depth += 1;
    }

    /// Open `subgraph <id>[<title>]` with an unquoted single-word title
    pub fn open_titled_group(&mut self, id: &str, title: &str) {
        self.register(id);
        self.push(format!("subgraph {}[{}]", id, title));
        self.depth += 1;
    }

    /// Open `subgraph <id>` followed by `class <id> <class_name>`
    pub fn open_classed_group(&mut self, id: &str, class_name: &str) {
        self.register(id);
        self.push(format!("subgraph {}", id));
        self.push(format!("class {} {}", id, class_name));
        self.depth += 1;
    }

    /// Close the innermost open group with `end`
    pub fn close_group(&mut self) -> Result<()> {
        if self.open_groups() == 0 {
            return Err(DiagramError::render_error(
                "attempted to close a group with none open",
            ));
        }
        self.depth -= 1;
        self.push("end".to_string());
        Ok(())
    }

    /// Write a leaf node `<id>["<label>"]`
    pub fn node(&mut self, id: &str, label: &str) {
        self.register(id);
        self.push(format!("{}[\"{}\"]", id, escape_label(label)));
    }

    /// Write an undirected labelled link `<from> ---|<label>| <to>`
    pub fn edge(&mut self, from: &str, label: &str, to: &str) {
        self.push(format!("{} ---|{}| {}", from, escape_edge_label(label), to));
    }

    /// Join all lines with `\n`, failing if any group is still open
    pub fn finish(self) -> Result<String> {
        if self.open_groups() != 0 {
            return Err(DiagramError::render_error(format!(
                "{} subgraph(s) left open",
                self.open_groups()
            )));
        }
        Ok(self.lines.join("\n"))
    }

    fn push(&mut self, text: String) {
        self.lines.push(format!("{}{}", INDENT.repeat(self.depth), text));
    }

    fn register(&mut self, id: &str) {
        if !self.seen_ids.insert(id.to_string()) {
            warn!(id, "Duplicate node identifier, elements will alias");
        }
    }
}
