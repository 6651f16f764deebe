//! Verify command - run the closure check and map the verdict to an exit code

use anyhow::Result;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::inventory::{self, Suffixes};
use crate::models::{RunStats, Verdict};
use crate::reporters::{self, OutputFormat};
use crate::walker::{self, WalkError};

/// Run the verify command; returns the contract exit code (0/1/2/3).
pub(crate) fn run(root: &Path, format: &str, suffixes: &Suffixes) -> Result<i32> {
    let format = OutputFormat::from_str(format)?;

    let entry_points = inventory::discover_entry_points(root, suffixes)?;
    let files = inventory::collect(root, suffixes)?;
    debug!(
        "verifying {}: {} entry points, {} files in inventory",
        root.display(),
        entry_points.len(),
        files.len()
    );

    let verdict = match walker::walk(root, &entry_points) {
        Ok(outcome) => {
            let stats = RunStats {
                entry_points: entry_points.len(),
                reachable: outcome.reachable.len(),
                inventory: files.len(),
            };
            Verdict::classify(&outcome, &files, stats)
        }
        Err(WalkError::NoEntryPoints(root)) => Verdict::NoEntryPoints { root },
    };

    print!("{}", reporters::render(&verdict, format)?);
    Ok(verdict.exit_code())
}
