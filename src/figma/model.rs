//! Figma variables data model.
//!
//! Mirrors the JSON shape Figma's variables import expects: an array of
//! collections, each holding named modes, each mode holding typed variables.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the single mode every collection carries.
pub const DEFAULT_MODE: &str = "Default";

/// Figma variable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FigmaType {
    Color,
    Float,
    String,
}

impl FigmaType {
    /// Map a token `$type` to the Figma variable type.
    ///
    /// color → COLOR; dimension, fontWeight, fontSize, lineHeight,
    /// letterSpacing → FLOAT; fontFamily and everything else → STRING.
    pub fn from_token_type(token_type: &str) -> Self {
        match token_type {
            "color" => FigmaType::Color,
            "dimension" | "fontWeight" | "fontSize" | "lineHeight" | "letterSpacing" => {
                FigmaType::Float
            }
            _ => FigmaType::String,
        }
    }

    /// The type name as it appears in the export.
    pub fn as_str(&self) -> &'static str {
        match self {
            FigmaType::Color => "COLOR",
            FigmaType::Float => "FLOAT",
            FigmaType::String => "STRING",
        }
    }
}

/// An RGBA colour with floating-point channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    /// Opaque black, the fallback for missing or unparseable colours.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
}

/// A variable's value: a colour record, a number, or the raw token value
/// passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Color(Rgba),
    Number(f64),
    Raw(Value),
}

/// A single exported variable.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub figma_type: FigmaType,
    pub value: VariableValue,
}

/// A mode within a collection. This exporter always emits exactly one,
/// named `Default`.
#[derive(Debug, Clone, Serialize)]
pub struct Mode {
    pub name: String,
    pub variables: Vec<Variable>,
}

/// A variable collection (`Light` or `Dark`).
#[derive(Debug, Clone, Serialize)]
pub struct Collection {
    pub name: String,
    pub modes: Vec<Mode>,
}

impl Collection {
    /// Create an empty collection with its single `Default` mode.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modes: vec![Mode {
                name: DEFAULT_MODE.to_string(),
                variables: Vec::new(),
            }],
        }
    }

    /// Append a variable to the default mode.
    pub fn push(&mut self, variable: Variable) {
        self.modes[0].variables.push(variable);
    }

    /// Variables in the default mode.
    pub fn variables(&self) -> &[Variable] {
        &self.modes[0].variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_map() {
        assert_eq!(FigmaType::from_token_type("color"), FigmaType::Color);
        assert_eq!(FigmaType::from_token_type("dimension"), FigmaType::Float);
        assert_eq!(FigmaType::from_token_type("fontWeight"), FigmaType::Float);
        assert_eq!(FigmaType::from_token_type("fontSize"), FigmaType::Float);
        assert_eq!(FigmaType::from_token_type("lineHeight"), FigmaType::Float);
        assert_eq!(FigmaType::from_token_type("letterSpacing"), FigmaType::Float);
        assert_eq!(FigmaType::from_token_type("fontFamily"), FigmaType::String);
        assert_eq!(FigmaType::from_token_type("shadow"), FigmaType::String);
        assert_eq!(FigmaType::from_token_type(""), FigmaType::String);
    }

    #[test]
    fn test_figma_type_serializes_uppercase() {
        assert_eq!(serde_json::to_value(FigmaType::Color).unwrap(), json!("COLOR"));
        assert_eq!(serde_json::to_value(FigmaType::Float).unwrap(), json!("FLOAT"));
        assert_eq!(serde_json::to_value(FigmaType::String).unwrap(), json!("STRING"));
    }

    #[test]
    fn test_rgba_alpha_defaults_to_opaque() {
        let rgba: Rgba = serde_json::from_value(json!({"r": 0.5, "g": 0.25, "b": 1.0})).unwrap();
        assert_eq!(rgba.a, 1.0);
    }

    #[test]
    fn test_variable_serializes_type_field() {
        let variable = Variable {
            name: "color/primary".to_string(),
            figma_type: FigmaType::Color,
            value: VariableValue::Color(Rgba::BLACK),
        };
        let v = serde_json::to_value(&variable).unwrap();
        assert_eq!(
            v,
            json!({
                "name": "color/primary",
                "type": "COLOR",
                "value": { "r": 0.0, "g": 0.0, "b": 0.0, "a": 1.0 }
            })
        );
    }

    #[test]
    fn test_collection_has_single_default_mode() {
        let c = Collection::new("Light");
        assert_eq!(c.modes.len(), 1);
        assert_eq!(c.modes[0].name, "Default");
        assert!(c.variables().is_empty());
    }
}
