//! Shades command implementation.
//!
//! Prints one `name-key: #hex` line per shade to stdout.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::{generate_shades_with, ShadeRamp, ShadeStrategy};

/// Print the shade ramp for a colour
#[derive(Args, Debug)]
pub struct ShadesArgs {
    /// Base colour (#rrggbb)
    pub colour: String,

    /// Token name prefix
    #[arg(long, default_value = "primary")]
    pub name: String,

    /// Shade ramp strategy
    #[arg(long, value_enum, default_value_t = ShadeStrategy::Hsl)]
    pub strategy: ShadeStrategy,
}

pub fn run(args: ShadesArgs, printer: &Printer) -> Result<()> {
    let ramp = generate_shades_with(&args.colour, args.strategy);

    if ramp.is_degenerate() {
        printer.warning(
            "Skipped",
            &format!("{:?} is not a #rrggbb colour, only shade 500 is set", args.colour),
        );
    }

    for line in listing(&args.name, &ramp) {
        println!("{}", line);
    }

    Ok(())
}

fn listing(name: &str, ramp: &ShadeRamp) -> Vec<String> {
    ramp.iter()
        .map(|(key, hex)| format!("{}-{}: {}", name, key, hex))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_listing() {
        let ramp = generate_shades_with("#646464", ShadeStrategy::Brightness);
        let lines = listing("gray", &ramp);

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "gray-50: #bebebe");
        assert_eq!(lines[5], "gray-500: #646464");
        assert_eq!(lines[9], "gray-900: #141414");
    }

    #[test]
    fn test_listing_degenerate() {
        let ramp = generate_shades_with("teal", ShadeStrategy::Hsl);
        assert_eq!(listing("accent", &ramp), vec!["accent-500: teal".to_string()]);
    }

    #[test]
    fn test_run_accepts_invalid_colour() {
        let args = ShadesArgs {
            colour: "teal".to_string(),
            name: "accent".to_string(),
            strategy: ShadeStrategy::Hsl,
        };
        assert!(run(args, &Printer::plain()).is_ok());
    }
}
