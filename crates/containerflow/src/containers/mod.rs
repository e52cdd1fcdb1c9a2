//! Container diagram pipeline
//!
//! Turns container documents into a Mermaid flowchart:
//! Document → Normalizer → Database → Container Renderer → Relationship Renderer

mod assembler;
mod database;
mod document;
mod generator;
mod normalizer;
mod relationships;
mod renderer;

pub use assembler::*;
pub use database::*;
pub use document::*;
pub use generator::*;
pub use normalizer::*;
pub use relationships::*;
pub use renderer::*;
