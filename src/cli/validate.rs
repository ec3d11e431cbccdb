use clap::Args;

use crate::error::{Result, TokenError};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_seeds};

use super::SeedArgs;

/// Check seed values without generating
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub seeds: SeedArgs,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let seeds = args.seeds.resolve()?.to_seeds();
    let result = validate_seeds(&seeds);

    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(TokenError::Validation {
            message: format!(
                "seeds have {}",
                plural(result.error_count(), "error", "errors")
            ),
            help: None,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args_for(config: std::path::PathBuf) -> ValidateArgs {
        ValidateArgs {
            seeds: SeedArgs {
                config: Some(config),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_valid_config() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("tokens.yaml");
        fs::write(&config, "primary: \"#10b981\"\nscale-ratio: 1.2\n").unwrap();

        assert!(run(args_for(config), &Printer::plain()).is_ok());
    }

    #[test]
    fn test_warnings_pass() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("tokens.yaml");
        fs::write(&config, "scale-ratio: 3\n").unwrap();

        assert!(run(args_for(config), &Printer::plain()).is_ok());
    }

    #[test]
    fn test_invalid_colour_is_a_warning() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("tokens.yaml");
        fs::write(&config, "accent: \"#fff\"\n").unwrap();

        assert!(run(args_for(config), &Printer::plain()).is_ok());
    }

    #[test]
    fn test_errors_fail() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("tokens.yaml");
        fs::write(&config, "scale-ratio: 0\nbase-size: 0\n").unwrap();

        let err = run(args_for(config), &Printer::plain()).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: seeds have 2 errors");
    }
}
