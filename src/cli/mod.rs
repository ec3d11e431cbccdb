pub mod completions;
pub mod generate;
pub mod init;
pub mod scheme;
pub mod shades;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::seeds::Config;
use crate::types::ShadeStrategy;

/// tokengen - Design token generator
#[derive(Parser, Debug)]
#[command(name = "tokengen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate design tokens and export them as JSON
    Generate(generate::GenerateArgs),

    /// Write a tokens.yaml with default seeds
    Init(init::InitArgs),

    /// Check seed values without generating
    Validate(validate::ValidateArgs),

    /// Print the shade ramp for a colour
    Shades(shades::ShadesArgs),

    /// Print a split-complementary colour scheme
    Scheme(scheme::SchemeArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Seed flags shared by commands that read tokens.yaml.
#[derive(Args, Debug, Default)]
pub struct SeedArgs {
    /// Config file (default: tokens.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Primary colour (#rrggbb); random if not set anywhere
    #[arg(long)]
    pub primary: Option<String>,

    /// Secondary colour; derived from the primary if not set
    #[arg(long)]
    pub secondary: Option<String>,

    /// Accent colour; derived from the primary if not set
    #[arg(long)]
    pub accent: Option<String>,

    /// Font family for the type scale
    #[arg(long)]
    pub font_family: Option<String>,

    /// Base font size in pixels
    #[arg(long)]
    pub base_size: Option<u32>,

    /// Type scale ratio
    #[arg(long)]
    pub ratio: Option<f64>,

    /// Spacing base in pixels
    #[arg(long)]
    pub spacing: Option<u32>,

    /// Border radius base in pixels
    #[arg(long)]
    pub radius: Option<u32>,

    /// Number of shadow levels
    #[arg(long)]
    pub shadows: Option<u32>,

    /// Shade ramp strategy
    #[arg(long, value_enum)]
    pub strategy: Option<ShadeStrategy>,

    /// Seed for the random primary colour
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SeedArgs {
    /// Flags as a config layer to merge over the file.
    pub fn to_overrides(&self) -> Config {
        Config {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
            accent: self.accent.clone(),
            font_family: self.font_family.clone(),
            base_size: self.base_size,
            scale_ratio: self.ratio,
            spacing_base: self.spacing,
            radius_base: self.radius,
            shadow_levels: self.shadows,
            strategy: self.strategy,
            seed: self.seed,
            output: None,
        }
    }

    /// Load the config file (if any) and apply the flags over it.
    pub fn resolve(&self) -> Result<Config> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let file = Config::discover(self.config.as_deref(), &cwd)?;
        Ok(file.merge(self.to_overrides()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::parse_from([
            "tokengen",
            "generate",
            "--primary",
            "#3b82f6",
            "--ratio",
            "1.5",
            "--strategy",
            "brightness",
            "--stdout",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.seeds.primary.as_deref(), Some("#3b82f6"));
        assert_eq!(args.seeds.ratio, Some(1.5));
        assert_eq!(args.seeds.strategy, Some(ShadeStrategy::Brightness));
        assert!(args.stdout);
    }

    #[test]
    fn test_non_numeric_flag_is_rejected() {
        let result = Cli::try_parse_from(["tokengen", "generate", "--base-size", "big"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_map_flag_names() {
        let args = SeedArgs {
            ratio: Some(1.2),
            spacing: Some(8),
            shadows: Some(2),
            ..Default::default()
        };
        let config = args.to_overrides();
        assert_eq!(config.scale_ratio, Some(1.2));
        assert_eq!(config.spacing_base, Some(8));
        assert_eq!(config.shadow_levels, Some(2));
        assert!(config.output.is_none());
    }
}
