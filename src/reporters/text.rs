//! Text (terminal) reporter
//!
//! Keeps the line-oriented shape CI scripts grep for: a failure header
//! followed by one indented line per offending edge or unused file, or a
//! success banner with entry/reachable/inventory counts.

use crate::models::Verdict;
use anyhow::Result;
use console::style;

const RULE: &str = "──────────────────────────────────────────────────";

/// Render a verdict as formatted terminal output
pub fn render(verdict: &Verdict) -> Result<String> {
    let mut out = String::new();

    match verdict {
        Verdict::NoEntryPoints { root } => {
            out.push_str(&format!(
                "{} no entry-point translation units directly under {}\n",
                style("ERROR:").red().bold(),
                root.display()
            ));
        }
        Verdict::Broken { diagnostics } => {
            out.push_str(&format!(
                "{}\n",
                style("MISSING OR ILLEGAL INCLUDES").red().bold()
            ));
            for line in diagnostics {
                out.push_str(&format!("  {line}\n"));
            }
        }
        Verdict::Unused { files } => {
            out.push_str(&format!(
                "{}\n",
                style("UNUSED FILES IN ACTIVE ROOT").yellow().bold()
            ));
            for file in files {
                out.push_str(&format!("  {}\n", file.display()));
            }
        }
        Verdict::Clean { stats } => {
            out.push_str(&format!("{}\n", style(RULE).dim()));
            out.push_str(&format!(
                "{} include closure holds\n",
                style("[OK]").green().bold()
            ));
            out.push_str(&format!("{}\n", style(RULE).dim()));
            out.push_str(&format!(
                "Entry points: {}\n",
                style(stats.entry_points).cyan()
            ));
            out.push_str(&format!("Files reached: {}\n", style(stats.reachable).cyan()));
            out.push_str(&format!(
                "Files in inventory: {}\n",
                style(stats.inventory).cyan()
            ));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunStats;
    use std::path::PathBuf;

    #[test]
    fn test_broken_lists_each_diagnostic() {
        let verdict = Verdict::Broken {
            diagnostics: vec![
                "/r/main.cpp -> ghost.hpp".to_string(),
                "/r/main.cpp -> up.hpp (outside active)".to_string(),
            ],
        };
        let out = render(&verdict).unwrap();
        assert!(out.contains("MISSING OR ILLEGAL INCLUDES"));
        assert!(out.contains("  /r/main.cpp -> ghost.hpp"));
        assert!(out.contains("(outside active)"));
    }

    #[test]
    fn test_unused_lists_each_file() {
        let verdict = Verdict::Unused {
            files: vec![PathBuf::from("/r/c.hpp")],
        };
        let out = render(&verdict).unwrap();
        assert!(out.contains("UNUSED FILES"));
        assert!(out.contains("  /r/c.hpp"));
    }

    #[test]
    fn test_clean_prints_counts() {
        let verdict = Verdict::Clean {
            stats: RunStats {
                entry_points: 2,
                reachable: 5,
                inventory: 5,
            },
        };
        let out = render(&verdict).unwrap();
        assert!(out.contains("Entry points: 2"));
        assert!(out.contains("Files reached: 5"));
        assert!(out.contains("Files in inventory: 5"));
    }
}
