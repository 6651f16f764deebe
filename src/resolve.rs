//! Include resolution
//!
//! Maps a raw include target to the single path it denotes. Resolution is
//! two-tier, first match wins: relative to the including file's directory,
//! then relative to the active root. A target present at both tiers always
//! binds to the file-relative one (shadowing).
//!
//! Containment against the active root is a plain string-prefix comparison
//! on the lexically normalized path, not a canonicalized real-path check.
//! Known limitation, preserved on purpose: a sibling directory whose name
//! shares the active root as a string prefix (`/src/active_old` next to
//! `/src/active`) is misclassified as inside, and symlinked subtrees or
//! case-folding filesystems are not seen through.

use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components without touching the filesystem.
///
/// `fs::canonicalize` would resolve symlinks, which the containment
/// contract forbids, so normalization is purely lexical.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                // ".." above an absolute root is absorbed, as
                // os.path.normpath does.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                // A leading ".." on a relative path cannot be popped.
                Some(Component::ParentDir) | None => out.push(Component::ParentDir),
                _ => {
                    out.pop();
                }
            },
            other => out.push(other),
        }
    }
    out
}

/// Resolve `target` as included from `from`, or `None` if no candidate
/// exists on disk.
pub fn resolve(root: &Path, from: &Path, target: &str) -> Option<PathBuf> {
    let base = from.parent().unwrap_or_else(|| Path::new(""));

    let candidate = normalize(&base.join(target));
    if candidate.exists() {
        return Some(candidate);
    }

    let candidate = normalize(&root.join(target));
    if candidate.exists() {
        return Some(candidate);
    }

    None
}

/// Prefix containment check against the active root.
pub fn is_inside(root: &Path, path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .starts_with(root.as_os_str().as_encoded_bytes())
}
