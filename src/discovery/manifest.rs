//! Project manifest (tokens.yaml) parsing.
//!
//! The manifest defines project configuration: where token source files
//! live, where the export goes, and the dark-file naming convention.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FigvarError, Result};

/// Default marker identifying dark-theme token files (e.g. `base.dark.json`).
pub const DEFAULT_DARK_MARKER: &str = ".dark.";

/// Project manifest loaded from tokens.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for token files.
    /// Defaults to `tokens/` when empty.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Output directory for the variables export.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Filename marker that classifies a token file as dark-theme.
    #[serde(default = "default_dark_marker")]
    pub dark_marker: String,

    /// Patterns to exclude from discovery.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("build/figma")
}

fn default_dark_marker() -> String {
    DEFAULT_DARK_MARKER.to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            dark_marker: default_dark_marker(),
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a tokens.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FigvarError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| FigvarError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check tokens.yaml syntax".to_string()),
        })
    }

    /// Source paths to scan, falling back to the `tokens/` convention.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec!["tokens".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.excludes {
            // Simple glob matching: * matches any sequence
            if Self::matches_pattern(&path_str, pattern) {
                return true;
            }
        }

        false
    }

    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if !pattern.contains('*') {
            return path.contains(pattern);
        }

        let parts: Vec<&str> = pattern.split('*').collect();
        let mut rest = path;

        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            match rest.find(part) {
                Some(pos) => {
                    // First part must anchor at the start when the pattern
                    // does not begin with *
                    if i == 0 && pos != 0 {
                        return false;
                    }
                    rest = &rest[pos + part.len()..];
                }
                None => return false,
            }
        }

        // Last part must anchor at the end when the pattern does not end with *
        if let Some(last) = parts.last() {
            if !last.is_empty() && !path.ends_with(last) {
                return false;
            }
        }

        true
    }
}
