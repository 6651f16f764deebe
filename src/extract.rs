//! Include extraction
//!
//! Pulls quoted `#include "..."` targets out of one file. Deliberately
//! precision-over-recall: only directives that start the line (after
//! trimming leading whitespace) are recognized, so an include buried behind
//! other tokens, inside a comment tail, or in a string literal elsewhere on
//! a line never matches. Angle-bracket (system) includes never match.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

static INCLUDE_RE: OnceLock<Regex> = OnceLock::new();

fn include_re() -> &'static Regex {
    INCLUDE_RE.get_or_init(|| {
        Regex::new(r#"^#include\s*"([^"]+)""#).expect("include regex is valid")
    })
}

/// Ordered list of quoted include targets in `path`, duplicates preserved.
///
/// Unreadable files (permission errors, non-UTF-8 binary content) degrade
/// to an empty list; a candidate file must never abort the run.
pub fn includes(path: &Path) -> Vec<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            debug!("skipping unreadable file {}: {}", path.display(), err);
            return Vec::new();
        }
    };

    content
        .lines()
        .filter_map(|line| {
            include_re()
                .captures(line.trim_start())
                .map(|caps| caps[1].to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_and_extract(source: &str) -> Vec<String> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.cpp");
        fs::write(&path, source).unwrap();
        includes(&path)
    }

    #[test]
    fn test_quoted_includes_in_order_with_duplicates() {
        let got = write_and_extract(
            "#include \"a.hpp\"\n\
             #include \"b/c.hpp\"\n\
             #include \"a.hpp\"\n",
        );
        assert_eq!(got, vec!["a.hpp", "b/c.hpp", "a.hpp"]);
    }

    #[test]
    fn test_angle_includes_never_match() {
        let got = write_and_extract("#include <vector>\n#include \"mine.hpp\"\n");
        assert_eq!(got, vec!["mine.hpp"]);
    }

    #[test]
    fn test_leading_whitespace_is_trimmed() {
        let got = write_and_extract("    #include \"indented.hpp\"\n\t#include \"tabbed.hpp\"\n");
        assert_eq!(got, vec!["indented.hpp", "tabbed.hpp"]);
    }

    #[test]
    fn test_include_not_at_line_start_is_ignored() {
        let got = write_and_extract(
            "// #include \"commented.hpp\"\n\
             int x = 0; // #include \"tail.hpp\"\n\
             const char* s = \"#include \\\"literal.hpp\\\"\";\n",
        );
        assert!(got.is_empty());
    }

    #[test]
    fn test_spacing_variants() {
        let got = write_and_extract("#include\"tight.hpp\"\n#include   \"spaced.hpp\"\n");
        assert_eq!(got, vec!["tight.hpp", "spaced.hpp"]);
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(includes(&dir.path().join("nope.cpp")).is_empty());
    }

    #[test]
    fn test_binary_content_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.hpp");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x23, 0x69]).unwrap();
        assert!(includes(&path).is_empty());
    }
}
