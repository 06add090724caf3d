//! Validate command implementation.
//!
//! Parses and resolves token files, runs the validation checks, and
//! reports diagnostics without writing any output.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::{FigvarError, Result};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_token_set};

/// Check token files without writing output
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Token files or directories to check (default: tokens.yaml sources
    /// or the tokens/ directory)
    pub paths: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.paths.is_empty() {
        discover(".", None)?
    } else {
        discover_paths(&args.paths, None)?
    };

    printer.status(
        "Checking",
        &format!(
            "{} ({} light, {} dark)",
            plural(discovery.scan.total(), "token file", "token files"),
            discovery.scan.light.len(),
            discovery.scan.dark.len()
        ),
    );

    let set = discovery.load_token_set()?;
    let result = validate_token_set(&set);

    print_diagnostics(&result, printer);

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 || (args.strict && warnings > 0) {
        printer.error(
            "Failed",
            &format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
        return Err(FigvarError::Validation {
            message: format!(
                "validation failed with {} and {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
            help: None,
        });
    }

    if warnings > 0 {
        printer.warning(
            "Passed",
            &format!("{} tokens, {}", set.len(), plural(warnings, "warning", "warnings")),
        );
    } else {
        printer.success("Passed", &plural(set.len(), "token", "tokens"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run_on(dir: &std::path::Path, strict: bool) -> Result<()> {
        run(
            ValidateArgs {
                paths: vec![dir.to_path_buf()],
                strict,
            },
            &Printer::new(),
        )
    }

    #[test]
    fn test_validate_clean_tokens_passes() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("base.json"),
            r##"{ "color": { "primary": { "$type": "color", "$value": "#FF0000" } } }"##,
        )
        .unwrap();

        assert!(run_on(dir.path(), false).is_ok());
    }

    #[test]
    fn test_validate_warnings_pass_by_default() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("base.json"),
            r#"{ "color": { "alias": { "$type": "color", "$value": "{missing.token}" } } }"#,
        )
        .unwrap();

        assert!(run_on(dir.path(), false).is_ok());
    }

    #[test]
    fn test_validate_strict_fails_on_warnings() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("base.json"),
            r#"{ "color": { "alias": { "$type": "color", "$value": "{missing.token}" } } }"#,
        )
        .unwrap();

        assert!(run_on(dir.path(), true).is_err());
    }

    #[test]
    fn test_validate_broken_json_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{").unwrap();

        assert!(run_on(dir.path(), false).is_err());
    }
}
