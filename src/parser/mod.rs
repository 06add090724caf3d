//! Token source file parser.
//!
//! Token files are JSON trees in the design-tokens format: groups nest
//! arbitrarily, and a leaf is any object carrying a `$value` key, with an
//! optional `$type`. A group may declare a `$type` that its leaves inherit.
//!
//! ```json
//! {
//!   "color": {
//!     "$type": "color",
//!     "brand": {
//!       "primary": { "$value": "#FF0000" }
//!     }
//!   }
//! }
//! ```
//!
//! Parsing flattens the tree into `RawToken` records whose `path` is the
//! chain of group keys down to the leaf. Key order in the file is preserved
//! and becomes the export order, so the output is stable across runs.

use std::path::Path;

use serde_json::Value;

use crate::error::{FigvarError, Result};
use crate::registry::{RawToken, Theme};

/// Keys reserved by the token format; never treated as group names.
fn is_format_key(key: &str) -> bool {
    key.starts_with('$')
}

/// Parse one token source file into a flat token list.
pub fn parse_token_source(source: &str, path: &Path, theme: Theme) -> Result<Vec<RawToken>> {
    let root: Value = serde_json::from_str(source).map_err(|e| FigvarError::Parse {
        message: format!("{}: invalid JSON: {}", path.display(), e),
        help: None,
    })?;

    let Value::Object(ref groups) = root else {
        return Err(FigvarError::Parse {
            message: format!("{}: token file root must be a JSON object", path.display()),
            help: Some("Wrap top-level tokens in an object of named groups".to_string()),
        });
    };

    let mut tokens = Vec::new();
    let mut prefix = Vec::new();
    for (key, value) in groups {
        if is_format_key(key) {
            continue;
        }
        walk(key, value, &mut prefix, None, path, theme, &mut tokens);
    }

    Ok(tokens)
}

/// Recursive walk over a group member.
///
/// `inherited_type` carries the nearest enclosing group's `$type`; a leaf's
/// own `$type` wins over it.
fn walk(
    key: &str,
    value: &Value,
    prefix: &mut Vec<String>,
    inherited_type: Option<&str>,
    source: &Path,
    theme: Theme,
    out: &mut Vec<RawToken>,
) {
    let Value::Object(members) = value else {
        // Not a group and not a `$value` leaf; nothing to collect.
        return;
    };

    prefix.push(key.to_string());

    if let Some(token_value) = members.get("$value") {
        let token_type = members
            .get("$type")
            .and_then(|t| t.as_str())
            .or(inherited_type)
            .unwrap_or("");

        out.push(RawToken {
            path: prefix.clone(),
            token_type: token_type.to_string(),
            value: token_value.clone(),
            source: source.to_path_buf(),
            theme,
        });
    } else {
        let group_type = members
            .get("$type")
            .and_then(|t| t.as_str())
            .or(inherited_type);

        for (child_key, child) in members {
            if is_format_key(child_key) {
                continue;
            }
            walk(child_key, child, prefix, group_type, source, theme, out);
        }
    }

    prefix.pop();
}
