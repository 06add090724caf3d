//! Value transforms: raw token values to Figma variable values.
//!
//! Each token `$type` with special handling (color, dimension, fontWeight)
//! has a pure transform function; everything else passes through unchanged.
//! The functions never fail: malformed local values degrade to a documented
//! default and record a warning diagnostic, so one bad token cannot abort a
//! build.
//!
//! Transforms are looked up through a [`Transforms`] registry value that the
//! collection builder receives explicitly. There is no global registration
//! step; callers that want custom handling construct their own registry.

use indexmap::IndexMap;
use serde_json::Value;

use crate::figma::{Rgba, VariableValue};
use crate::validation::ValidationResult;

/// A value transform: resolved token value in, variable value out.
///
/// The token name is for diagnostics only. `None` means the token had no
/// value at all (treated the same as JSON `null`).
pub type TransformFn = fn(Option<&Value>, &str, &mut ValidationResult) -> VariableValue;

/// Registry mapping token `$type` strings to transforms.
#[derive(Debug, Clone)]
pub struct Transforms {
    by_type: IndexMap<String, TransformFn>,
}

impl Transforms {
    /// An empty registry: every type passes through unchanged.
    pub fn empty() -> Self {
        Self {
            by_type: IndexMap::new(),
        }
    }

    /// The standard registry used by `figvar build`: color, dimension and
    /// fontWeight transforms.
    pub fn standard() -> Self {
        let mut t = Self::empty();
        t.register("color", color);
        t.register("dimension", dimension);
        t.register("fontWeight", font_weight);
        t
    }

    /// Register a transform for a token type, replacing any existing one.
    pub fn register(&mut self, token_type: impl Into<String>, transform: TransformFn) -> &mut Self {
        self.by_type.insert(token_type.into(), transform);
        self
    }

    /// Apply the transform for `token_type`, or the identity when no
    /// transform is registered for it.
    pub fn apply(
        &self,
        token_type: &str,
        value: Option<&Value>,
        token_name: &str,
        diagnostics: &mut ValidationResult,
    ) -> VariableValue {
        match self.by_type.get(token_type) {
            Some(transform) => transform(value, token_name, diagnostics),
            None => identity(value),
        }
    }
}

impl Default for Transforms {
    fn default() -> Self {
        Self::standard()
    }
}

/// Pass the raw value through unchanged.
fn identity(value: Option<&Value>) -> VariableValue {
    VariableValue::Raw(value.cloned().unwrap_or(Value::Null))
}

/// Color transform.
///
/// Strings parse as CSS colors (hex, rgb(), hsl(), named) into channels in
/// `[0, 1]`; an object already shaped `{r,g,b,a}` passes through unchanged;
/// anything else falls back to opaque black with a warning.
pub fn color(value: Option<&Value>, token_name: &str, diagnostics: &mut ValidationResult) -> VariableValue {
    let Some(value) = present(value) else {
        diagnostics.warning(
            "figvar::transform::missing-color",
            format!("no color value found for token `{}`", token_name),
        );
        return VariableValue::Color(Rgba::BLACK);
    };

    match value {
        Value::String(s) => match csscolorparser::parse(s) {
            Ok(c) => VariableValue::Color(Rgba {
                r: c.r,
                g: c.g,
                b: c.b,
                a: c.a,
            }),
            Err(_) => {
                diagnostics.warning(
                    "figvar::transform::bad-color",
                    format!("unparseable color `{}` for token `{}`", s, token_name),
                );
                VariableValue::Color(Rgba::BLACK)
            }
        },
        Value::Object(_) => match serde_json::from_value::<Rgba>(value.clone()) {
            // Pre-resolved channel object: used as-is, channels untouched.
            Ok(rgba) => VariableValue::Color(rgba),
            Err(_) => {
                diagnostics.warning(
                    "figvar::transform::bad-color",
                    format!("color object for token `{}` is not {{r,g,b,a}}", token_name),
                );
                VariableValue::Color(Rgba::BLACK)
            }
        },
        _ => {
            diagnostics.warning(
                "figvar::transform::bad-color",
                format!("color value for token `{}` is neither string nor object", token_name),
            );
            VariableValue::Color(Rgba::BLACK)
        }
    }
}

/// Dimension transform: `"16px"` → `16.0`.
///
/// Missing values warn and become `0`. A remainder that does not parse as a
/// number yields NaN (serialized as `null`), which `figvar validate` flags
/// but the build does not reject.
pub fn dimension(value: Option<&Value>, token_name: &str, diagnostics: &mut ValidationResult) -> VariableValue {
    let Some(value) = present(value) else {
        diagnostics.warning(
            "figvar::transform::missing-dimension",
            format!("no dimension value found for token `{}`", token_name),
        );
        return VariableValue::Number(0.0);
    };

    VariableValue::Number(dimension_number(value))
}

/// Numeric part of a dimension value; NaN when it cannot be parsed.
pub fn dimension_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            let numeric = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
            numeric.parse::<f64>().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

/// Font-weight transform: keyword or numeric string to a weight number.
///
/// Missing values warn and become `400`. Unknown keywords that do not parse
/// as integers yield NaN, as with dimensions.
pub fn font_weight(value: Option<&Value>, token_name: &str, diagnostics: &mut ValidationResult) -> VariableValue {
    let Some(value) = present(value) else {
        diagnostics.warning(
            "figvar::transform::missing-font-weight",
            format!("no font weight value found for token `{}`", token_name),
        );
        return VariableValue::Number(400.0);
    };

    VariableValue::Number(font_weight_number(value))
}

/// Numeric weight for a font-weight value; NaN when it cannot be mapped.
pub fn font_weight_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => match s.as_str() {
            "normal" => 400.0,
            "medium" => 500.0,
            "semibold" => 600.0,
            "bold" => 700.0,
            other => other.trim().parse::<i64>().map(|n| n as f64).unwrap_or(f64::NAN),
        },
        _ => f64::NAN,
    }
}

/// Treat JSON `null` the same as an absent value.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}
