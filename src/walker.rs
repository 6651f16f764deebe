//! Graph walker
//!
//! Breadth-first closure computation over the include graph.
//!
//! # Algorithm
//!
//! Explicit worklist, no recursion (include chains can be deep):
//! 1. Seed a FIFO queue with the entry points.
//! 2. Pop a file; skip if already seen; record a missing node if it does
//!    not exist on disk.
//! 3. Otherwise mark it seen, extract its quoted includes, resolve each.
//!    Unresolved targets become missing edges. Targets resolving outside
//!    the active root become illegal edges *and are still enqueued*, so a
//!    single pass surfaces every violation instead of stopping at the
//!    first boundary breach.
//!
//! The seen-set only grows and the filesystem is finite, so termination is
//! guaranteed. The final reachable set and the set of broken edges are
//! deterministic regardless of queue discipline; diagnostic ordering is
//! imposed later by sorting.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::extract;
use crate::models::{Edge, EdgeKind, WalkOutcome};
use crate::resolve;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("no entry-point translation units directly under {0}")]
    NoEntryPoints(PathBuf),
}

/// Run the closure traversal from `entry_points`.
pub fn walk(root: &Path, entry_points: &[PathBuf]) -> Result<WalkOutcome, WalkError> {
    if entry_points.is_empty() {
        return Err(WalkError::NoEntryPoints(root.to_path_buf()));
    }

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut queue: VecDeque<PathBuf> = entry_points.iter().cloned().collect();
    let mut edges: Vec<Edge> = Vec::new();
    let mut missing_nodes: Vec<PathBuf> = Vec::new();

    debug!(
        "walking include graph from {} entry points",
        entry_points.len()
    );

    while let Some(current) = queue.pop_front() {
        if seen.contains(&current) {
            continue;
        }
        if !current.exists() {
            missing_nodes.push(current);
            continue;
        }
        seen.insert(current.clone());

        for target in extract::includes(&current) {
            match resolve::resolve(root, &current, &target) {
                None => {
                    edges.push(Edge {
                        from: current.clone(),
                        target,
                        resolved: None,
                        kind: EdgeKind::Missing,
                    });
                }
                Some(resolved) => {
                    let kind = if resolve::is_inside(root, &resolved) {
                        EdgeKind::Resolved
                    } else {
                        EdgeKind::Illegal
                    };
                    // Illegal targets are enqueued too; the walk keeps
                    // exploring past a boundary violation.
                    if !seen.contains(&resolved) {
                        queue.push_back(resolved.clone());
                    }
                    edges.push(Edge {
                        from: current.clone(),
                        target,
                        resolved: Some(resolved),
                        kind,
                    });
                }
            }
        }
    }

    let broken = edges.iter().filter(|e| e.kind != EdgeKind::Resolved).count()
        + missing_nodes.len();
    info!(
        "walk complete: {} files reached, {} edges, {} broken",
        seen.len(),
        edges.len(),
        broken
    );

    Ok(WalkOutcome {
        reachable: seen,
        edges,
        missing_nodes,
    })
}
