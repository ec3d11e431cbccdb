//! Generate command implementation.
//!
//! Resolves seeds from tokens.yaml and flags, generates every token and
//! writes `figma-design-system.json`.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, TokenError};
use crate::export::{write_document, DesignSystem};
use crate::output::{display_path, plural, Printer};
use crate::types::seeded_rng;

use super::SeedArgs;

/// Generate design tokens and export them as JSON
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub seeds: SeedArgs,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = args.seeds.resolve()?;
    let seeds = config.to_seeds();
    let mut rng = seeded_rng(config.seed);

    let doc = seeds.generate(&mut rng)?;

    for (group, ramp) in doc.colors.iter() {
        if ramp.is_degenerate() {
            printer.warning(
                "Skipped",
                &format!("{} shades (unparseable base {:?})", group, ramp.base().unwrap_or("")),
            );
        }
    }

    if args.stdout {
        println!("{}", doc.to_json()?);
        return Ok(());
    }

    let output = args.output.unwrap_or_else(|| config.effective_output());
    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| TokenError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let path = write_document(&doc, &output)?;
    printer.status("Generated", &summary(&doc));
    printer.success("Exported", &printer.cyan(&display_path(&path)));

    Ok(())
}

/// One-line summary of what a document contains.
fn summary(doc: &DesignSystem) -> String {
    format!(
        "{}, {}, {}",
        plural(doc.colors.token_count(), "colour", "colours"),
        plural(doc.typography.type_scale.iter().count(), "type size", "type sizes"),
        plural(doc.variables.shadows.len(), "shadow", "shadows"),
    )
}
