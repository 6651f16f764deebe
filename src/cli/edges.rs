//! Edges command - read-only dump of the discovered include graph
//!
//! Inspection view for debugging a failing verify run: one line per
//! directive, sorted, with missing/illegal edges annotated. Always exits 0.

use anyhow::Result;
use console::style;
use std::path::Path;
use std::str::FromStr;

use crate::inventory::{self, Suffixes};
use crate::models::EdgeKind;
use crate::reporters::OutputFormat;
use crate::walker::{self, WalkError};

pub(crate) fn run(root: &Path, format: &str, suffixes: &Suffixes) -> Result<i32> {
    let format = OutputFormat::from_str(format)?;

    let entry_points = inventory::discover_entry_points(root, suffixes)?;
    let mut edges = match walker::walk(root, &entry_points) {
        Ok(outcome) => outcome.edges,
        Err(WalkError::NoEntryPoints(root)) => {
            eprintln!(
                "no entry-point translation units directly under {}; nothing to walk",
                root.display()
            );
            return Ok(0);
        }
    };

    edges.sort();
    edges.dedup();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&edges)?);
        }
        OutputFormat::Text => {
            println!("{} include edges\n", style(edges.len()).cyan());
            for edge in &edges {
                let annotation = match edge.kind {
                    EdgeKind::Resolved => String::new(),
                    EdgeKind::Missing => format!(" {}", style("(missing)").red()),
                    EdgeKind::Illegal => format!(" {}", style("(outside active)").red()),
                };
                let resolved = edge
                    .resolved
                    .as_deref()
                    .map(|p| format!(" => {}", p.display()))
                    .unwrap_or_default();
                println!(
                    "  {} -> {}{}{}",
                    edge.from.display(),
                    edge.target,
                    resolved,
                    annotation
                );
            }
        }
    }

    Ok(0)
}
