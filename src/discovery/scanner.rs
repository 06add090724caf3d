//! File system scanner for discovering token source files.
//!
//! Recursively scans directories for `.json` token files and classifies
//! them as light or dark by the dark filename marker. Walk order is sorted
//! by file name so repeated builds see the same file order.

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::registry::Theme;

use super::manifest::Manifest;

/// Result of scanning for token files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered light/default token files.
    pub light: Vec<PathBuf>,
    /// Discovered dark-theme token files.
    pub dark: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.light.len() + self.dark.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// All files in load order: light files first, then dark files.
    pub fn files_in_order(&self) -> impl Iterator<Item = (&PathBuf, Theme)> {
        self.light
            .iter()
            .map(|p| (p, Theme::Light))
            .chain(self.dark.iter().map(|p| (p, Theme::Dark)))
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.light.extend(other.light);
        self.dark.extend(other.dark);
    }

    fn add(&mut self, path: PathBuf, theme: Theme) {
        match theme {
            Theme::Light => self.light.push(path),
            Theme::Dark => self.dark.push(path),
        }
    }
}

/// Normalize a path for containment checks.
///
/// Relative paths resolve against the current directory and `.`/`..`
/// components collapse, so a walk entry like `./tokens/out/variables.json`
/// and a manifest output like `tokens/out` compare consistently.
fn comparable(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Scan a directory tree for token files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    let output_dir = comparable(&manifest.output);

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        // Never re-ingest a previous export
        if comparable(path).starts_with(&output_dir) {
            continue;
        }

        if manifest.is_excluded(path) {
            continue;
        }

        if let Some(theme) = classify_token_file(path, &manifest.dark_marker) {
            result.add(path.to_path_buf(), theme);
        }
    }

    result
}

/// Scan multiple source paths.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        let scan = scan_directory(&source_path, manifest);
        result.merge(scan);
    }

    result
}

/// Classify a file as a light or dark token source.
///
/// Returns `None` for non-JSON files. A JSON file whose name carries the
/// dark marker before its extension (e.g. `base.dark.json`) is dark;
/// every other JSON file is light.
pub fn classify_token_file(path: &Path, dark_marker: &str) -> Option<Theme> {
    let filename = path.file_name()?.to_str()?;

    if !filename.ends_with(".json") {
        return None;
    }

    if filename.contains(dark_marker) {
        Some(Theme::Dark)
    } else {
        Some(Theme::Light)
    }
}
