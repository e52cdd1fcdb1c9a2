//! Core building blocks for diagram generation
//!
//! Errors, logging, configuration, the normalized container model,
//! identifier sanitizing and the line writer shared by every stage.

mod config;
mod error;
mod identifier;
pub mod logging;
mod types;
mod writer;

pub use config::*;
pub use error::*;
pub use identifier::*;
pub use logging::*;
pub use types::*;
pub use writer::*;
