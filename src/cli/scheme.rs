//! Scheme command implementation.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::{derive_scheme, random_scheme, seeded_rng, Scheme};

/// Print a split-complementary colour scheme
#[derive(Args, Debug)]
pub struct SchemeArgs {
    /// Primary colour (#rrggbb); random if omitted
    pub colour: Option<String>,

    /// Seed for the random primary colour
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: SchemeArgs, printer: &Printer) -> Result<()> {
    let scheme = match &args.colour {
        Some(colour) => derive_scheme(colour)?,
        None => {
            let scheme = random_scheme(&mut seeded_rng(args.seed));
            printer.info("Picked", &format!("random primary {}", printer.cyan(&scheme.primary.to_hex())));
            scheme
        }
    };

    for line in listing(&scheme) {
        println!("{}", line);
    }

    Ok(())
}

fn listing(scheme: &Scheme) -> [String; 3] {
    [
        format!("primary: {}", scheme.primary),
        format!("secondary: {}", scheme.secondary),
        format!("accent: {}", scheme.accent),
    ]
}
