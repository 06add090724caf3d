//! figvar - Figma variables export for design tokens
//!
//! A library for transforming design-token JSON files into a
//! Figma-compatible variables document with Light and Dark collections.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod figma;
pub mod output;
pub mod parser;
pub mod registry;
pub mod transform;
pub mod validation;

pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, ScanResult};
pub use error::{FigvarError, Result};
pub use figma::{
    build_collections, variables_json, write_variables, Collection, FigmaType, Mode, Rgba,
    Variable, VariableValue,
};
pub use parser::parse_token_source;
pub use registry::{RawToken, ResolvedToken, Theme, TokenSet, TokenSetBuilder};
pub use transform::Transforms;
pub use validation::{validate_token_set, Diagnostic, Severity, ValidationResult};
