//! Core token types shared across the pipeline.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;

/// Which collection a token belongs to.
///
/// Determined by the source file name: files carrying the dark marker
/// (default `.dark.`) before their extension hold dark-theme overrides,
/// everything else is part of the light/default set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Collection name used in the Figma export.
    pub fn collection_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}

/// A token as parsed from a source file, before reference resolution.
#[derive(Debug, Clone)]
pub struct RawToken {
    /// Ordered path segments forming the token's unique name.
    pub path: Vec<String>,
    /// The token's `$type` (possibly inherited from an enclosing group).
    /// Empty when neither the leaf nor any ancestor declares one.
    pub token_type: String,
    /// The raw `$value`, exactly as written in the source file.
    pub value: Value,
    /// File the token was read from.
    pub source: PathBuf,
    /// Light or dark membership, derived from the source file name.
    pub theme: Theme,
}

impl RawToken {
    /// The token's dotted path, used as its registry key and for
    /// reference lookups (`{a.b.c}`).
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    /// The token's slash-joined name, used for the exported variable.
    pub fn variable_name(&self) -> String {
        self.path.join("/")
    }

    /// Whether the raw value is a `{dotted.path}` reference string.
    pub fn is_reference(&self) -> bool {
        reference_target(&self.value).is_some()
    }
}

/// A token after reference resolution.
#[derive(Debug, Clone)]
pub struct ResolvedToken {
    pub path: Vec<String>,
    pub token_type: String,
    /// The raw `$value` from the source file.
    pub raw_value: Value,
    /// The value after one level of reference substitution. Identical to
    /// `raw_value` when the token is not a reference, and still the literal
    /// `{…}` string when the reference did not resolve.
    pub resolved_value: Value,
    pub source: PathBuf,
    pub theme: Theme,
}

impl ResolvedToken {
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    pub fn variable_name(&self) -> String {
        self.path.join("/")
    }

    /// Whether the resolved value is still an unresolved `{…}` reference.
    pub fn is_unresolved_reference(&self) -> bool {
        reference_target(&self.resolved_value).is_some()
    }
}

/// Extract the dotted path from a reference value.
///
/// Returns `Some("a.b.c")` for a string value of the form `"{a.b.c}"`,
/// `None` for anything else.
pub fn reference_target(value: &Value) -> Option<&str> {
    let s = value.as_str()?;
    s.strip_prefix('{')?.strip_suffix('}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token(path: &[&str], value: Value) -> RawToken {
        RawToken {
            path: path.iter().map(|s| s.to_string()).collect(),
            token_type: "color".to_string(),
            value,
            source: PathBuf::from("tokens/base.json"),
            theme: Theme::Light,
        }
    }

    #[test]
    fn test_dotted_and_variable_names() {
        let t = token(&["color", "brand", "primary"], json!("#FF0000"));
        assert_eq!(t.dotted_path(), "color.brand.primary");
        assert_eq!(t.variable_name(), "color/brand/primary");
    }

    #[test]
    fn test_reference_target() {
        assert_eq!(reference_target(&json!("{color.base}")), Some("color.base"));
        assert_eq!(reference_target(&json!("#FF0000")), None);
        assert_eq!(reference_target(&json!(16)), None);
        assert_eq!(reference_target(&json!("{unterminated")), None);
    }

    #[test]
    fn test_is_reference() {
        assert!(token(&["a"], json!("{b.c}")).is_reference());
        assert!(!token(&["a"], json!("12px")).is_reference());
    }

    #[test]
    fn test_theme_collection_names() {
        assert_eq!(Theme::Light.collection_name(), "Light");
        assert_eq!(Theme::Dark.collection_name(), "Dark");
    }
}
