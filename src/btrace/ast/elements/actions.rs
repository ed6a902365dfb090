//! Action block element definition

use serde::Serialize;
use std::fmt;

/// The lines of a `{ ... }` block, kept as separate strings so a backend can rewrite
/// them one at a time
///
/// A block always has at least one line; an empty block holds a single empty line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActionBlock {
    lines: Vec<String>,
}

impl ActionBlock {
    pub fn new(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            return Self {
                lines: vec![String::new()],
            };
        }
        Self { lines }
    }

    /// Split captured block text into trimmed lines
    pub fn from_raw(raw: &str) -> Self {
        Self::new(raw.split('\n').map(|line| line.trim().to_string()).collect())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }
}

impl fmt::Display for ActionBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
