//! List command implementation.
//!
//! Discovers tokens and prints an inventory grouped by collection,
//! in export order.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::Result;
use crate::figma::FigmaType;
use crate::output::{plural, Printer};
use crate::registry::{Theme, TokenSet};

/// List discovered tokens
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Token files or directories to scan (default: tokens.yaml sources
    /// or the tokens/ directory)
    pub paths: Vec<PathBuf>,

    /// Show source file for each token
    #[arg(long)]
    pub sources: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.paths.is_empty() {
        discover(".", None)?
    } else {
        discover_paths(&args.paths, None)?
    };

    let set = discovery.load_token_set()?;

    for theme in [Theme::Light, Theme::Dark] {
        print_collection(&set, theme, args.sources, printer);
    }

    printer.info("Total", &plural(set.len(), "token", "tokens"));

    Ok(())
}

fn print_collection(set: &TokenSet, theme: Theme, sources: bool, printer: &Printer) {
    let tokens: Vec<_> = set.iter_theme(theme).collect();

    println!("{} ({})", theme, plural(tokens.len(), "token", "tokens"));
    for token in tokens {
        let type_label = FigmaType::from_token_type(&token.token_type).as_str();

        if sources {
            println!(
                "  {} [{}] {}",
                token.variable_name(),
                type_label,
                printer.dim(&token.source.display().to_string())
            );
        } else {
            println!("  {} [{}]", token.variable_name(), type_label);
        }
    }
}
