//! Folder-level diagram generation
//!
//! Binds the assembler to a root folder: documents are discovered there,
//! the folder name labels the outer group, and the result is saved next to
//! the inputs.

use std::fs;
use std::path::PathBuf;

use tracing::{info, span, Level};

use super::{discover_documents, DiagramAssembler, DiagramStats, Document};
use crate::core::{DiagramError, GeneratorConfig, Result};

/// Generates and saves the diagram for one root folder
#[derive(Debug, Clone)]
pub struct DiagramGenerator {
    config: GeneratorConfig,
    assembler: DiagramAssembler,
}

impl DiagramGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            assembler: DiagramAssembler::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Name of the root folder, used for the outer group and output file
    pub fn folder_name(&self) -> String {
        self.config.folder_name()
    }

    /// Load the `*.json` documents of the root folder, sorted by file name
    pub fn discover_documents(&self) -> Result<Vec<Document>> {
        discover_documents(self.config.root())
    }

    /// Generate diagram text
    ///
    /// Uses the given documents, or discovers them in the root folder when
    /// `None`. Fails with [`DiagramError::NoInput`] when there are none.
    pub fn generate_diagram(&self, documents: Option<Vec<Document>>) -> Result<String> {
        self.generate_with_stats(documents).map(|(text, _)| text)
    }

    /// Generate diagram text along with document, container and edge counts
    pub fn generate_with_stats(
        &self,
        documents: Option<Vec<Document>>,
    ) -> Result<(String, DiagramStats)> {
        let documents = match documents {
            Some(documents) => documents,
            None => self.discover_documents()?,
        };

        if documents.is_empty() {
            return Err(DiagramError::no_input(Some(
                self.config.root().to_path_buf(),
            )));
        }

        self.assembler
            .assemble_with_stats(&self.folder_name(), &documents)
    }

    /// Generate the diagram from the root folder and write it there
    ///
    /// The file is named after `output_name`, else the configured name, else
    /// `<folder>_diagram.mmd`. Returns the text and the path written.
    pub fn save_diagram(&self, output_name: Option<&str>) -> Result<(String, PathBuf)> {
        let save_span = span!(
            Level::INFO,
            "save_diagram",
            root = %self.config.root().display()
        );
        let _enter = save_span.enter();

        let diagram = self.generate_diagram(None)?;

        let output_path = match output_name {
            Some(name) => self.config.root().join(name),
            None => self.config.output_path(),
        };

        fs::write(&output_path, &diagram)
            .map_err(|e| DiagramError::write_error(&output_path, e))?;

        info!(
            path = %output_path.display(),
            bytes = diagram.len(),
            "Successfully created diagram"
        );
        Ok((diagram, output_path))
    }
}
