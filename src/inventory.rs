//! Inventory collection and entry-point discovery
//!
//! The inventory is a deep scan: every recognized source/header file
//! anywhere under the active root. Entry points are a shallow scan:
//! translation units that are *direct children* of the root. The asymmetry
//! is inherited behavior and preserved exactly — a translation unit nested
//! in a subdirectory can never seed the traversal and will be flagged
//! unused unless some shallow entry point includes it. Flagged for review
//! in DESIGN.md rather than silently fixed.

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::resolve;

/// Recognized file suffixes, overridable from the CLI.
#[derive(Debug, Clone)]
pub struct Suffixes {
    /// Translation-unit suffixes; these seed the traversal.
    pub sources: Vec<String>,
    /// Header suffixes; counted in the inventory only.
    pub headers: Vec<String>,
}

impl Default for Suffixes {
    fn default() -> Self {
        Self {
            sources: vec!["cpp".to_string()],
            headers: vec!["hpp".to_string(), "h".to_string()],
        }
    }
}

impl Suffixes {
    fn is_source(&self, ext: &str) -> bool {
        self.sources.iter().any(|s| s == ext)
    }

    /// Inventory membership: any source or header suffix.
    fn is_recognized(&self, ext: &str) -> bool {
        self.is_source(ext) || self.headers.iter().any(|s| s == ext)
    }
}

/// Deep scan: every recognized file under `root`, recursively.
///
/// Hidden-file and gitignore filtering are disabled, unlike a typical
/// analyzer walk: the inventory must count every physical file, including
/// ones a `.gitignore` would hide, or the unused-file check lies.
pub fn collect(root: &Path, suffixes: &Suffixes) -> Result<BTreeSet<PathBuf>> {
    let mut files = BTreeSet::new();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build();

    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_file() {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if suffixes.is_recognized(ext) {
                    files.insert(resolve::normalize(path));
                }
            }
        }
    }

    debug!("inventory: {} files under {}", files.len(), root.display());
    Ok(files)
}

/// Shallow scan: translation units that are direct children of `root`.
///
/// Sorted for reproducible diagnostic ordering. An empty result means the
/// traversal has no seed and the run must terminate with exit code 1.
pub fn discover_entry_points(root: &Path, suffixes: &Suffixes) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    let dir = std::fs::read_dir(root)
        .with_context(|| format!("cannot list active root {}", root.display()))?;
    for entry in dir {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if suffixes.is_source(ext) {
                    entries.push(resolve::normalize(&path));
                }
            }
        }
    }

    entries.sort();
    debug!("entry points: {} under {}", entries.len(), root.display());
    Ok(entries)
}
