//! Probe declaration element definition

use serde::Serialize;
use std::fmt;

/// Library assumed for `p::` and `r::` probes
pub const KERNEL_LIBRARY: &str = "kernel";

/// What kind of instrumentation point a probe hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeKind {
    /// Function entry, written `p`
    Entry,
    /// Function return, written `r`
    Return,
    /// A builtin event such as `BEGIN`, written with no kind letter
    Builtin,
}

impl ProbeKind {
    /// Resolve an explicit kind letter. Builtin probes have no letter.
    pub fn from_discriminator(letter: &str) -> Option<Self> {
        match letter {
            "p" => Some(ProbeKind::Entry),
            "r" => Some(ProbeKind::Return),
            _ => None,
        }
    }

    pub fn discriminator(self) -> Option<&'static str> {
        match self {
            ProbeKind::Entry => Some("p"),
            ProbeKind::Return => Some("r"),
            ProbeKind::Builtin => None,
        }
    }

    /// Library used when the library segment is left empty
    pub fn default_library(self) -> &'static str {
        match self {
            ProbeKind::Entry | ProbeKind::Return => KERNEL_LIBRARY,
            ProbeKind::Builtin => "",
        }
    }
}

/// `[kind:][library:]function[(signature)]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeDeclaration {
    kind: ProbeKind,
    library: String,
    function: String,
    signature: String,
}

impl ProbeDeclaration {
    pub fn new(
        kind: ProbeKind,
        library: impl Into<String>,
        function: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            library: library.into(),
            function: function.into(),
            signature: signature.into(),
        }
    }

    pub fn kind(&self) -> ProbeKind {
        self.kind
    }

    /// Library name, possibly empty
    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    /// Raw parameter list between the parentheses, possibly empty
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl fmt::Display for ProbeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.discriminator() {
            Some(letter) => write!(f, "{}:{}:{}", letter, self.library, self.function)?,
            None => write!(f, "::{}", self.function)?,
        }
        if !self.signature.is_empty() {
            write!(f, "({})", self.signature)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminators() {
        assert_eq!(ProbeKind::from_discriminator("p"), Some(ProbeKind::Entry));
        assert_eq!(ProbeKind::from_discriminator("r"), Some(ProbeKind::Return));
        assert_eq!(ProbeKind::from_discriminator("b"), None);
        assert_eq!(ProbeKind::from_discriminator("P"), None);
        assert_eq!(ProbeKind::Builtin.discriminator(), None);
    }

    #[test]
    fn test_default_library() {
        assert_eq!(ProbeKind::Entry.default_library(), "kernel");
        assert_eq!(ProbeKind::Return.default_library(), "kernel");
        assert_eq!(ProbeKind::Builtin.default_library(), "");
    }

    #[test]
    fn test_display() {
        let decl = ProbeDeclaration::new(ProbeKind::Entry, "kernel", "__kmalloc", "size_t size");
        assert_eq!(decl.to_string(), "p:kernel:__kmalloc(size_t size)");

        let decl = ProbeDeclaration::new(ProbeKind::Return, "c", "malloc", "");
        assert_eq!(decl.to_string(), "r:c:malloc");

        let decl = ProbeDeclaration::new(ProbeKind::Builtin, "", "BEGIN", "");
        assert_eq!(decl.to_string(), "::BEGIN");
    }
}
