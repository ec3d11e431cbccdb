use clap::Parser;
use miette::Result;
use tokengen::cli::{Cli, Commands};
use tokengen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => tokengen::cli::generate::run(args, &printer)?,
        Commands::Init(args) => tokengen::cli::init::run(args, &printer)?,
        Commands::Validate(args) => tokengen::cli::validate::run(args, &printer)?,
        Commands::Shades(args) => tokengen::cli::shades::run(args, &printer)?,
        Commands::Scheme(args) => tokengen::cli::scheme::run(args, &printer)?,
        Commands::Completions(args) => tokengen::cli::completions::run(args)?,
    }

    Ok(())
}
