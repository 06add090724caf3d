use clap::Parser;
use figvar::cli::{Cli, Commands};
use figvar::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => figvar::cli::build::run(args, &printer)?,
        Commands::Validate(args) => figvar::cli::validate::run(args, &printer)?,
        Commands::List(args) => figvar::cli::list::run(args, &printer)?,
    }

    Ok(())
}
