pub mod build;
pub mod list;
pub mod validate;

use clap::{Parser, Subcommand};

/// figvar - Figma variables export for design tokens
#[derive(Parser, Debug)]
#[command(name = "figvar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build variables.json from token source files
    Build(build::BuildArgs),

    /// Check token files without writing output
    Validate(validate::ValidateArgs),

    /// List discovered tokens
    List(list::ListArgs),
}
