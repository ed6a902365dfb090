//! Predicate element definition

use serde::Serialize;
use std::fmt;

/// Guard text for a probe that was written without `/.../`
pub const ALWAYS_TRUE: &str = "1";

/// Raw guard text between the two `/` separators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Predicate {
    text: String,
}

impl Predicate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn always_true() -> Self {
        Self::new(ALWAYS_TRUE)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_always_true(&self) -> bool {
        self.text == ALWAYS_TRUE
    }
}

impl Default for Predicate {
    fn default() -> Self {
        Self::always_true()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
