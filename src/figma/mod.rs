//! Figma variables builder and emitter.
//!
//! Turns the resolved token set into the two-collection export document and
//! writes it as pretty-printed JSON. Collection order is fixed (Light first,
//! Dark second) and variables keep the token set's insertion order.

pub mod model;

use std::fs;
use std::path::Path;

use crate::error::{FigvarError, Result};
use crate::registry::{Theme, TokenSet};
use crate::transform::Transforms;
use crate::validation::ValidationResult;

pub use model::{Collection, FigmaType, Mode, Rgba, Variable, VariableValue, DEFAULT_MODE};

/// Name of the emitted document.
pub const VARIABLES_FILENAME: &str = "variables.json";

/// Build the `[Light, Dark]` collection pair from a resolved token set.
///
/// Each token becomes one variable in its theme's collection: name is the
/// slash-joined path, type comes from the fixed `$type` map, and the value
/// is produced by the transform registry (identity for unregistered types).
/// Local value problems degrade to defaults and are recorded in
/// `diagnostics`; this function itself never fails.
pub fn build_collections(
    set: &TokenSet,
    transforms: &Transforms,
    diagnostics: &mut ValidationResult,
) -> [Collection; 2] {
    let mut light = Collection::new(Theme::Light.collection_name());
    let mut dark = Collection::new(Theme::Dark.collection_name());

    for token in set.iter() {
        let variable = Variable {
            name: token.variable_name(),
            figma_type: FigmaType::from_token_type(&token.token_type),
            value: transforms.apply(
                &token.token_type,
                Some(&token.resolved_value),
                &token.dotted_path(),
                diagnostics,
            ),
        };

        match token.theme {
            Theme::Light => light.push(variable),
            Theme::Dark => dark.push(variable),
        }
    }

    [light, dark]
}

/// Serialize the collection pair as the output document.
///
/// Pretty-printed with 2-space indentation; non-finite numbers serialize as
/// `null`. The same input always yields byte-identical output.
pub fn variables_json(collections: &[Collection; 2]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(collections).map_err(|e| FigvarError::Build {
        message: format!("Failed to serialize variables: {}", e),
        help: None,
    })?;
    json.push('\n');
    Ok(json)
}

/// Write the document to `dir/variables.json`.
pub fn write_variables(collections: &[Collection; 2], dir: &Path) -> Result<std::path::PathBuf> {
    let path = dir.join(VARIABLES_FILENAME);
    let json = variables_json(collections)?;
    fs::write(&path, json).map_err(|e| FigvarError::Io {
        path: path.clone(),
        message: format!("Failed to write variables: {}", e),
    })?;
    Ok(path)
}
