//! Containerflow CLI - Turn folders of JSON container descriptions into Mermaid flowcharts

mod cli;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let app = cli::ContainerflowApp::new();

    if let Err(e) = app.run(cli_args) {
        tracing::error!(error = %e, "Diagram generation failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
