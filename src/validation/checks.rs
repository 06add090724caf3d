//! Validation checks over the resolved token set.

use crate::registry::{Theme, TokenSet};
use crate::transform::{dimension_number, font_weight_number};
use crate::validation::{Diagnostic, ValidationResult};

/// Token `$type` values the exporter knows how to map.
const KNOWN_TYPES: &[&str] = &[
    "color",
    "dimension",
    "fontWeight",
    "fontSize",
    "lineHeight",
    "letterSpacing",
    "fontFamily",
];

/// Warn about dotted paths that were defined more than once within a theme.
pub fn check_shadowed_paths(set: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (theme, path) in set.shadowed() {
        result.warning(
            "figvar::validate::shadowed-path",
            format!("token `{}` is defined more than once in {}; the last definition wins", path, theme),
        );
    }

    result
}

/// Warn about tokens with no `$value`.
pub fn check_missing_values(set: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for token in set.iter() {
        if token.raw_value.is_null() {
            result.warning(
                "figvar::validate::missing-value",
                format!("token `{}` has no value; it will export as a default", token.dotted_path()),
            );
        }
    }

    result
}

/// Warn about `$type` values the exporter does not recognise.
///
/// Unknown types are not an error: they export as STRING with the value
/// passed through unchanged.
pub fn check_unknown_types(set: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for token in set.iter() {
        if token.token_type.is_empty() {
            result.push(
                Diagnostic::warning(
                    "figvar::validate::missing-type",
                    format!("token `{}` declares no $type", token.dotted_path()),
                )
                .with_help("Add $type to the token or an enclosing group"),
            );
        } else if !KNOWN_TYPES.contains(&token.token_type.as_str()) {
            result.warning(
                "figvar::validate::unknown-type",
                format!(
                    "token `{}` has unrecognised $type `{}`; it will export as STRING",
                    token.dotted_path(),
                    token.token_type
                ),
            );
        }
    }

    result
}

/// Warn about reference values whose target does not exist.
pub fn check_unresolved_references(set: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for token in set.iter() {
        if token.is_unresolved_reference() {
            result.push(
                Diagnostic::warning(
                    "figvar::validate::unresolved-reference",
                    format!(
                        "token `{}` references `{}` which does not resolve; the literal string is kept",
                        token.dotted_path(),
                        token.resolved_value.as_str().unwrap_or_default()
                    ),
                )
                .with_help("Check the referenced path, or define the missing token"),
            );
        }
    }

    result
}

/// Warn about dark tokens with no light counterpart.
///
/// Figma shows the Light collection as the default; a dark-only variable
/// usually means a typo in one of the two files.
pub fn check_dark_without_light(set: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for token in set.iter_theme(Theme::Dark) {
        if set.get(Theme::Light, &token.dotted_path()).is_none() {
            result.warning(
                "figvar::validate::dark-only-token",
                format!(
                    "dark token `{}` has no light counterpart",
                    token.dotted_path()
                ),
            );
        }
    }

    result
}

/// Warn about dimension and fontWeight values that will export as NaN
/// (serialized as `null`).
pub fn check_numeric_values(set: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for token in set.iter() {
        if token.resolved_value.is_null() || token.is_unresolved_reference() {
            // Reported by the missing-value / unresolved-reference checks.
            continue;
        }

        let parsed = match token.token_type.as_str() {
            "dimension" => dimension_number(&token.resolved_value),
            "fontWeight" => font_weight_number(&token.resolved_value),
            _ => continue,
        };

        if parsed.is_nan() {
            result.warning(
                "figvar::validate::non-numeric-value",
                format!(
                    "{} token `{}` has value {} which is not numeric; it will export as null",
                    token.token_type,
                    token.dotted_path(),
                    token.resolved_value
                ),
            );
        }
    }

    result
}
