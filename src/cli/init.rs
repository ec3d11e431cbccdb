//! Init command implementation.
//!
//! Writes a `tokens.yaml` holding every seed, with brand colours taken
//! from a random split-complementary scheme.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, TokenError};
use crate::output::{display_path, Printer};
use crate::seeds::{Config, Seeds, CONFIG_FILENAME};
use crate::types::{random_scheme, seeded_rng};

/// Write a tokens.yaml with default seeds
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write tokens.yaml into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing tokens.yaml
    #[arg(long)]
    pub force: bool,

    /// Seed for the random colour scheme
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(TokenError::Export {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let scheme = random_scheme(&mut seeded_rng(args.seed));
    let defaults = Seeds::default();
    let config = Config {
        primary: Some(scheme.primary.to_hex()),
        secondary: Some(scheme.secondary.to_hex()),
        accent: Some(scheme.accent.to_hex()),
        font_family: Some(defaults.font_family),
        base_size: Some(defaults.base_size),
        scale_ratio: Some(defaults.scale_ratio),
        spacing_base: Some(defaults.spacing_base),
        radius_base: Some(defaults.radius_base),
        shadow_levels: Some(defaults.shadow_levels),
        strategy: Some(defaults.strategy),
        seed: None,
        output: Some(PathBuf::from("dist")),
    };

    fs::write(&config_path, config.to_yaml()?).map_err(|e| TokenError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.info(
        "Picked",
        &format!(
            "primary {}, secondary {}, accent {}",
            printer.cyan(&scheme.primary.to_hex()),
            printer.cyan(&scheme.secondary.to_hex()),
            printer.cyan(&scheme.accent.to_hex()),
        ),
    );
    printer.success("Created", &display_path(&config_path));

    Ok(())
}
