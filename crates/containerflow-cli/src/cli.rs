//! Command-line interface for the containerflow utility
//!
//! Provides a CLI to turn a folder of JSON container documents into a
//! Mermaid flowchart file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

use containerflow::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use containerflow::{normalize, DiagramGenerator, Document, GeneratorConfig};

/// Containerflow - Turn JSON container descriptions into Mermaid flowcharts
#[derive(Parser)]
#[command(name = "containerflow")]
#[command(about = "Generate a Mermaid flowchart from a folder of JSON container documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the diagram and save it in the root folder
    Generate {
        /// Folder containing the JSON documents
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Output file name inside the root folder (default: <folder>_diagram.mmd)
        #[arg(short, long)]
        output: Option<String>,

        /// Print the diagram to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Generate the diagram without writing it, reporting any error
    Check {
        /// Folder containing the JSON documents
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },

    /// List the documents that would be included
    List {
        /// Folder containing the JSON documents
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Filter directive for the CLI: environment variables take precedence over
/// `--log-level`, with `CONTAINERFLOW_LOG_LEVEL` ahead of `RUST_LOG`
fn log_level_for(flag: LogLevel, crate_env: Option<String>, rust_log: Option<String>) -> String {
    crate_env
        .or(rust_log)
        .unwrap_or_else(|| flag.as_str().to_string())
}

/// Summary of one input document for `list`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DocumentSummary {
    pub file: String,
    pub display_name: String,
    pub group_id: String,
    pub containers: usize,
}

impl DocumentSummary {
    fn from_document(document: &Document) -> Result<Self> {
        let database = normalize(document.file_name(), document.content())?;
        Ok(Self {
            file: document.file_name().to_string(),
            display_name: document.display_name().to_string(),
            group_id: document.group_id().to_string(),
            containers: database.container_count(),
        })
    }
}

/// Main CLI application
#[derive(Debug, Default)]
pub struct ContainerflowApp;

impl ContainerflowApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        let log_level = log_level_for(
            cli.log_level,
            std::env::var(LOG_LEVEL_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
        );

        let log_format = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Containerflow v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                root,
                output,
                stdout,
            } => self.generate_command(root, output, stdout, cli.verbose),
            Commands::Check { root } => self.check_command(root, cli.verbose),
            Commands::List { root, json } => self.list_command(root, json, cli.verbose),
        }
    }

    fn generator(&self, root: PathBuf) -> DiagramGenerator {
        DiagramGenerator::new(GeneratorConfig::new(root))
    }

    /// Handle the generate command
    fn generate_command(
        &self,
        root: PathBuf,
        output: Option<String>,
        stdout: bool,
        verbose: bool,
    ) -> Result<()> {
        let generator = self.generator(root);

        if stdout {
            let diagram = generator.generate_diagram(None)?;
            let mut out = io::stdout();
            writeln!(out, "{}", diagram)?;
            out.flush()?;
            return Ok(());
        }

        let (diagram, path) = generator.save_diagram(output.as_deref())?;
        if verbose {
            eprintln!("Wrote {} bytes", diagram.len());
        }
        println!("Successfully created diagram: {}", path.display());
        Ok(())
    }

    /// Handle the check command
    fn check_command(&self, root: PathBuf, verbose: bool) -> Result<()> {
        let generator = self.generator(root);
        if verbose {
            eprintln!("Checking {}", generator.config().root().display());
        }

        match generator.generate_with_stats(None) {
            Ok((_, stats)) => {
                println!(
                    "✓ Valid diagram: {} document(s), {} container(s), {} relationship(s)",
                    stats.documents, stats.containers, stats.relationships
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid diagram: {}", e);
                Err(e.into())
            }
        }
    }

    /// Handle the list command
    fn list_command(&self, root: PathBuf, json: bool, verbose: bool) -> Result<()> {
        let summaries = self.summaries(root)?;
        if verbose {
            eprintln!("Found {} document(s)", summaries.len());
        }

        if json {
            let listing = serde_json::json!({
                "documents": summaries,
                "total": summaries.len(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            for summary in &summaries {
                println!(
                    "  {:<32} {} ({}), {} container(s)",
                    summary.file, summary.display_name, summary.group_id, summary.containers
                );
            }
            println!();
            println!("Total: {} document(s)", summaries.len());
        }
        Ok(())
    }

    /// Summarize every document discovered under `root`
    pub fn summaries(&self, root: PathBuf) -> Result<Vec<DocumentSummary>> {
        let generator = self.generator(root);
        let documents = generator.discover_documents().with_context(|| {
            format!(
                "Failed to read documents in '{}'",
                generator.config().root().display()
            )
        })?;
        documents.iter().map(DocumentSummary::from_document).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_sample(dir: &std::path::Path) {
        fs::write(
            dir.join("order-service.json"),
            r#"{
                "Orders": {"type": "service", "relationships": [{"target": "OrderDb", "type": "writes_to"}]},
                "OrderDb": {"type": "database"}
            }"#,
        )
        .unwrap();
    }

    #[test]
    fn test_cli_parsing_generate_command() {
        let args = vec![
            "containerflow",
            "generate",
            "--root",
            "docs/arch",
            "--output",
            "system.mmd",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Generate {
                root,
                output,
                stdout,
            } => {
                assert_eq!(root, PathBuf::from("docs/arch"));
                assert_eq!(output.as_deref(), Some("system.mmd"));
                assert!(!stdout);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_parsing_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(vec!["containerflow", "check"]).unwrap();
        match cli.command {
            Commands::Check { root } => assert_eq!(root, PathBuf::from(".")),
            _ => panic!("Expected Check command"),
        }
        assert_eq!(cli.log_level, LogLevel::Info);
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_cli_stdout_conflicts_with_output() {
        let args = vec!["containerflow", "generate", "--stdout", "--output", "x.mmd"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parsing_list_command() {
        let args = vec!["containerflow", "--verbose", "list", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::List { json, .. } => assert!(json),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_log_flags() {
        let args = vec![
            "containerflow",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "check",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.log_level.as_str(), "debug");
        assert_eq!(cli.log_format.as_str(), "json");
    }

    #[test]
    fn test_log_level_precedence() {
        let both = log_level_for(
            LogLevel::Warn,
            Some("debug".to_string()),
            Some("trace".to_string()),
        );
        assert_eq!(both, "debug");

        let rust_log = log_level_for(LogLevel::Warn, None, Some("trace".to_string()));
        assert_eq!(rust_log, "trace");

        assert_eq!(log_level_for(LogLevel::Warn, None, None), "warn");
    }

    #[test]
    fn test_generate_command_writes_file() {
        let dir = tempdir().unwrap();
        write_sample(dir.path());

        let app = ContainerflowApp::new();
        app.generate_command(
            dir.path().to_path_buf(),
            Some("out.mmd".to_string()),
            false,
            false,
        )
        .unwrap();

        let written = fs::read_to_string(dir.path().join("out.mmd")).unwrap();
        assert!(written.contains("order_service_orders ---|writes to| order_service_orderdb"));
    }

    #[test]
    fn test_check_command_reports_missing_target() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("broken.json"),
            r#"{"A": {"type": "service", "relationships": [{"target": "Nope", "type": "uses"}]}}"#,
        )
        .unwrap();

        let app = ContainerflowApp::new();
        assert!(app.check_command(dir.path().to_path_buf(), false).is_err());
    }

    #[test]
    fn test_check_command_empty_folder() {
        let dir = tempdir().unwrap();
        let app = ContainerflowApp::new();
        assert!(app.check_command(dir.path().to_path_buf(), false).is_err());
    }

    #[test]
    fn test_summaries() {
        let dir = tempdir().unwrap();
        write_sample(dir.path());

        let summaries = ContainerflowApp::new()
            .summaries(dir.path().to_path_buf())
            .unwrap();
        assert_eq!(
            summaries,
            vec![DocumentSummary {
                file: "order-service.json".to_string(),
                display_name: "Order Service".to_string(),
                group_id: "order_service".to_string(),
                containers: 2,
            }]
        );
    }

    #[test]
    fn test_list_command_json() {
        let dir = tempdir().unwrap();
        write_sample(dir.path());
        let app = ContainerflowApp::new();
        assert!(app.list_command(dir.path().to_path_buf(), true, false).is_ok());
    }
}
