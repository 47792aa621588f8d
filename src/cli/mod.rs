//! CLI command handlers for ArchSense.
//!
//! This module provides headless, scriptable access to layout synthesis and
//! the catalogs for automation, testing, and CI/CD integration.

pub mod catalog;
pub mod common;
pub mod config;
pub mod generate;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::{GenerateArgs, GenerateFormat};
