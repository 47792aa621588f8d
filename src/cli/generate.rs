//! Generate command for floor-plan documents.

use crate::cli::common::{to_json, CliError, CliResult};
use crate::config::Config;
use crate::export::{EditorDocument, SceneDocument};
use crate::services::{build_layout, synthesize, GenerateLayoutRequest};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Which document to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerateFormat {
    /// Full generate-layout response (plan, summary, capability blocks)
    Response,
    /// 3D scene projection only
    Scene,
    /// 2D plan-editor projection only
    Editor,
}

/// Synthesize a floor plan for a site
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Site width in millimeters (configured default if omitted)
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Site depth in millimeters (configured default if omitted)
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Document to emit
    #[arg(long, value_enum, default_value = "response")]
    pub format: GenerateFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON regardless of configuration
    #[arg(long)]
    pub compact: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let request = GenerateLayoutRequest {
            site_width_mm: self.width,
            site_depth_mm: self.depth,
            rooms: Vec::new(),
        };
        let pretty = config.output.pretty && !self.compact;

        let json = match self.format {
            GenerateFormat::Response => to_json(&synthesize(&request, &config.site)?, pretty)?,
            GenerateFormat::Scene => {
                let model = build_layout(request.site(&config.site)?);
                to_json(&SceneDocument::from_model(&model), pretty)?
            }
            GenerateFormat::Editor => {
                let model = build_layout(request.site(&config.site)?);
                to_json(&EditorDocument::from_model(&model), pretty)?
            }
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, json + "\n")
                    .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
                println!("✓ Generated floor plan");
                println!("  Output: {}", path.display());
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
