//! Core data models for Hermetic
//!
//! These models are shared between the walker, the verdict classifier,
//! and the reporters.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

/// How an include directive resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Resolved to a file inside the active root.
    Resolved,
    /// No candidate path exists on disk.
    Missing,
    /// Resolved, but to a path outside the active root.
    Illegal,
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Resolved => write!(f, "resolved"),
            EdgeKind::Missing => write!(f, "missing"),
            EdgeKind::Illegal => write!(f, "illegal"),
        }
    }
}

/// One include edge: a directive in `from` naming `target`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub from: PathBuf,
    pub target: String,
    pub resolved: Option<PathBuf>,
    pub kind: EdgeKind,
}

impl Edge {
    /// Diagnostic line for a broken edge.
    ///
    /// Illegal edges are tagged "(outside active)" so a reader can tell a
    /// boundary violation from a plain unresolvable target.
    pub fn describe(&self) -> String {
        match self.kind {
            EdgeKind::Illegal => {
                format!("{} -> {} (outside active)", self.from.display(), self.target)
            }
            _ => format!("{} -> {}", self.from.display(), self.target),
        }
    }
}

/// Result of one breadth-first traversal from the entry points.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Every file visited, keyed by normalized absolute path. Grows only.
    pub reachable: HashSet<PathBuf>,
    /// Every include directive encountered, in traversal order.
    pub edges: Vec<Edge>,
    /// Queued files that did not exist when popped (entry points only;
    /// resolved includes exist by construction).
    pub missing_nodes: Vec<PathBuf>,
}

impl WalkOutcome {
    /// True when no missing or illegal edge (or vanished node) was recorded.
    pub fn is_closed(&self) -> bool {
        self.missing_nodes.is_empty()
            && self.edges.iter().all(|e| e.kind == EdgeKind::Resolved)
    }
}

/// Counts printed on a clean run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub entry_points: usize,
    pub reachable: usize,
    pub inventory: usize,
}

/// Final classification of one run, in priority order.
///
/// An incomplete graph (missing/illegal edges) outranks the unused-file
/// hygiene check, so `Broken` is decided before `Unused`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// No translation units directly under the active root; nothing to seed
    /// the traversal with.
    NoEntryPoints { root: PathBuf },
    /// At least one missing or illegal include edge. Diagnostics are sorted
    /// and deduplicated.
    Broken { diagnostics: Vec<String> },
    /// Closure holds but some inventory files are unreachable. Sorted.
    Unused { files: Vec<PathBuf> },
    /// Closure holds and every inventory file is reached.
    Clean { stats: RunStats },
}

impl Verdict {
    /// Decision table from walk outcome + inventory.
    ///
    /// `NoEntryPoints` is decided upstream (the walker refuses to start);
    /// this only classifies a completed walk.
    pub fn classify(outcome: &WalkOutcome, inventory: &BTreeSet<PathBuf>, stats: RunStats) -> Self {
        if !outcome.is_closed() {
            let mut diagnostics: Vec<String> = outcome
                .missing_nodes
                .iter()
                .map(|p| p.display().to_string())
                .chain(
                    outcome
                        .edges
                        .iter()
                        .filter(|e| e.kind != EdgeKind::Resolved)
                        .map(Edge::describe),
                )
                .collect();
            diagnostics.sort();
            diagnostics.dedup();
            return Verdict::Broken { diagnostics };
        }

        // BTreeSet iteration keeps the unused list sorted.
        let unused: Vec<PathBuf> = inventory
            .iter()
            .filter(|p| !outcome.reachable.contains(*p))
            .cloned()
            .collect();

        if !unused.is_empty() {
            return Verdict::Unused { files: unused };
        }

        Verdict::Clean { stats }
    }

    /// Process exit code contract. Bit-exact: 0 clean, 1 no entry points,
    /// 2 missing/illegal edges, 3 unused files.
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Clean { .. } => 0,
            Verdict::NoEntryPoints { .. } => 1,
            Verdict::Broken { .. } => 2,
            Verdict::Unused { .. } => 3,
        }
    }
}
