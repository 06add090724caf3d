//! Build command implementation.
//!
//! Runs the full pipeline: discover token files, parse and resolve them,
//! transform values, and write `variables.json` into a freshly-cleaned
//! output directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, discover_paths, DiscoveryResult};
use crate::error::{FigvarError, Result};
use crate::figma::{build_collections, write_variables};
use crate::output::{display_path, plural, Printer};
use crate::registry::Theme;
use crate::transform::Transforms;
use crate::validation::{print_diagnostics, ValidationResult};

/// Build variables.json from token source files
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Token files or directories to process (default: tokens.yaml sources
    /// or the tokens/ directory)
    pub paths: Vec<PathBuf>,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Fail the build when any value warning is emitted
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let discovery = discover_args(&args.paths, args.output.as_deref())?;
    let output = discovery.manifest.output.clone();

    // Clean-room output: the directory holds exactly this run's files
    clean_output_dir(&output, printer)?;

    printer.status(
        "Scanning",
        &format!(
            "{} ({} light, {} dark)",
            plural(discovery.scan.total(), "token file", "token files"),
            discovery.scan.light.len(),
            discovery.scan.dark.len()
        ),
    );

    if discovery.scan.is_empty() {
        printer.warning("Warning", "no token files found; exporting empty collections");
    }

    let set = discovery.load_token_set()?;

    let mut diagnostics = ValidationResult::new();
    let collections = build_collections(&set, &Transforms::standard(), &mut diagnostics);

    if !diagnostics.is_ok() {
        printer.warning(
            "Warning",
            &format!(
                "{} during value transformation",
                plural(diagnostics.warning_count(), "warning", "warnings")
            ),
        );
        print_diagnostics(&diagnostics, printer);

        if args.strict {
            return Err(FigvarError::Validation {
                message: format!(
                    "strict mode: {} would be exported with default values",
                    plural(diagnostics.warning_count(), "token", "tokens")
                ),
                help: Some("Fix the reported token values or drop --strict".to_string()),
            });
        }
    }

    for theme in [Theme::Light, Theme::Dark] {
        let count = collections[theme as usize].variables().len();
        printer.status(
            "Exporting",
            &format!("{} ({})", plural(count, "variable", "variables"), theme),
        );
    }

    let path = write_variables(&collections, &output)?;
    printer.success("Finished", &display_path(&path));

    Ok(())
}

fn discover_args(paths: &[PathBuf], output: Option<&Path>) -> Result<DiscoveryResult> {
    if paths.is_empty() {
        discover(".", output)
    } else {
        discover_paths(paths, output)
    }
}

/// Delete and recreate the output directory.
fn clean_output_dir(dir: &Path, printer: &Printer) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => printer.status("Cleaning", &display_path(dir)),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(FigvarError::Io {
                path: dir.to_path_buf(),
                message: format!("Failed to clean output directory: {}", e),
            });
        }
    }

    fs::create_dir_all(dir).map_err(|e| FigvarError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    Ok(())
}
