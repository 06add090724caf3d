//! File discovery and token loading.
//!
//! Handles finding token source files for a project, either from a
//! `tokens.yaml` manifest or by the `tokens/` directory convention, and
//! loading them into a resolved `TokenSet`.
//!
//! # Example
//!
//! ```ignore
//! use figvar::discovery::discover;
//!
//! let result = discover("./my-project", None)?;
//! println!("Found {} token files", result.scan.total());
//!
//! let set = result.load_token_set()?;
//! ```

mod manifest;
mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FigvarError, Result};
use crate::parser::parse_token_source;
use crate::registry::{TokenSet, TokenSetBuilder};

pub use manifest::{Manifest, DEFAULT_DARK_MARKER};
pub use scanner::{classify_token_file, scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "tokens.yaml";

/// Result of discovering token files in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (may be default if no tokens.yaml found).
    pub manifest: Manifest,

    /// Whether a tokens.yaml manifest was found.
    pub has_manifest: bool,

    /// Scan results with discovered files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Parse all discovered files and build the resolved token set.
    ///
    /// Files load in scan order (light first, then dark), so registry
    /// insertion order and therefore export order is deterministic.
    pub fn load_token_set(&self) -> Result<TokenSet> {
        let mut builder = TokenSetBuilder::new();

        for (path, theme) in self.scan.files_in_order() {
            let source = fs::read_to_string(path).map_err(|e| FigvarError::Io {
                path: path.clone(),
                message: format!("Failed to read token file: {}", e),
            })?;
            builder.add_tokens(parse_token_source(&source, path, theme)?);
        }

        Ok(builder.build())
    }
}

/// Discover token files in a project directory.
///
/// Looks for a `tokens.yaml` manifest in the root directory. If found, uses
/// the manifest's source paths; otherwise scans the conventional `tokens/`
/// directory under the root. An `output_override` (e.g. from `--output`)
/// replaces the manifest's output directory before scanning, so a previous
/// export at that location is never re-ingested.
pub fn discover(root: impl AsRef<Path>, output_override: Option<&Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (mut manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    if let Some(output) = output_override {
        manifest.output = output.to_path_buf();
    }

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover token files from specific paths (no manifest lookup).
///
/// Directories are scanned recursively; files are classified directly.
/// A path that exists as neither is an error rather than a silent skip.
pub fn discover_paths(paths: &[PathBuf], output_override: Option<&Path>) -> Result<DiscoveryResult> {
    let mut manifest = Manifest::default();
    if let Some(output) = output_override {
        manifest.output = output.to_path_buf();
    }
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            let dir_scan = scan_directory(path, &manifest);
            scan.merge(dir_scan);
        } else if path.is_file() {
            match classify_token_file(path, &manifest.dark_marker) {
                Some(crate::registry::Theme::Light) => scan.light.push(path.clone()),
                Some(crate::registry::Theme::Dark) => scan.dark.push(path.clone()),
                None => {
                    return Err(FigvarError::Build {
                        message: format!("Not a token file: {}", path.display()),
                        help: Some("Token source files use the .json extension".to_string()),
                    });
                }
            }
        } else {
            return Err(FigvarError::Build {
                message: format!("No such file or directory: {}", path.display()),
                help: Some("Check the paths given on the command line".to_string()),
            });
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}
