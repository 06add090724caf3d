//! Validation system for token sets.
//!
//! Runs a suite of checks against a resolved token set and reports
//! warnings. Used by both `figvar validate` and `figvar build`. None of the
//! token checks are fatal; the build exports defaults for broken values and
//! these diagnostics explain what happened.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::registry::TokenSet;

/// Run all validation checks against the token set.
pub fn validate_token_set(set: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_shadowed_paths(set));
    result.merge(checks::check_missing_values(set));
    result.merge(checks::check_unknown_types(set));
    result.merge(checks::check_unresolved_references(set));
    result.merge(checks::check_dark_without_light(set));
    result.merge(checks::check_numeric_values(set));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let is_error = d.severity == Severity::Error;
        let label = printer.severity(&d.severity.to_string(), is_error);
        eprintln!("  {}[{}]: {}", label, printer.dim(&d.code), d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }
}
