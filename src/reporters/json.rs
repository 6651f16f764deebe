//! JSON reporter
//!
//! Outputs the verdict as pretty-printed JSON with the exit code embedded,
//! for machine consumption or piping to jq.

use crate::models::Verdict;
use anyhow::Result;
use serde_json::Value;

/// Render a verdict as JSON
pub fn render(verdict: &Verdict) -> Result<String> {
    let mut doc = serde_json::to_value(verdict)?;
    if let Value::Object(ref mut map) = doc {
        map.insert("exit_code".to_string(), Value::from(verdict.exit_code()));
    }
    Ok(serde_json::to_string_pretty(&doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunStats;
    use std::path::PathBuf;

    #[test]
    fn test_clean_shape() {
        let verdict = Verdict::Clean {
            stats: RunStats {
                entry_points: 1,
                reachable: 3,
                inventory: 3,
            },
        };
        let parsed: Value = serde_json::from_str(&render(&verdict).unwrap()).unwrap();
        assert_eq!(parsed["verdict"], "clean");
        assert_eq!(parsed["exit_code"], 0);
        assert_eq!(parsed["stats"]["reachable"], 3);
    }

    #[test]
    fn test_broken_shape() {
        let verdict = Verdict::Broken {
            diagnostics: vec!["/r/main.cpp -> ghost.hpp".to_string()],
        };
        let parsed: Value = serde_json::from_str(&render(&verdict).unwrap()).unwrap();
        assert_eq!(parsed["verdict"], "broken");
        assert_eq!(parsed["exit_code"], 2);
        assert_eq!(parsed["diagnostics"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_unused_shape() {
        let verdict = Verdict::Unused {
            files: vec![PathBuf::from("/r/c.hpp")],
        };
        let parsed: Value = serde_json::from_str(&render(&verdict).unwrap()).unwrap();
        assert_eq!(parsed["verdict"], "unused");
        assert_eq!(parsed["exit_code"], 3);
        assert_eq!(parsed["files"][0], "/r/c.hpp");
    }
}
