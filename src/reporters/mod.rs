//! Verdict reporters
//!
//! Supported output formats:
//! - `text` - Terminal output, mirrors the layout automation has scraped
//!   for years (failure header plus one indented line per offense)
//! - `json` - Machine-readable JSON

pub mod json;
pub mod text;

use crate::models::Verdict;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

/// Render a verdict in the specified format
pub fn render(verdict: &Verdict, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(verdict),
        OutputFormat::Json => json::render(verdict),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("sarif").is_err());
    }
}
