//! Program element definition

use super::definition::ProbeDefinition;
use serde::Serialize;
use std::fmt;

/// All probe definitions of a script, in script order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    probes: Vec<ProbeDefinition>,
}

impl Program {
    pub fn new(probes: Vec<ProbeDefinition>) -> Self {
        Self { probes }
    }

    pub fn probes(&self) -> &[ProbeDefinition] {
        &self.probes
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProbeDefinition> {
        self.probes.iter()
    }
}

impl IntoIterator for Program {
    type Item = ProbeDefinition;
    type IntoIter = std::vec::IntoIter<ProbeDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.probes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a ProbeDefinition;
    type IntoIter = std::slice::Iter<'a, ProbeDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.probes.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, probe) in self.probes.iter().enumerate() {
            if index > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{}", probe)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::btrace::ast::{ActionBlock, Predicate, ProbeDeclaration, ProbeKind};

    fn builtin(name: &str) -> ProbeDefinition {
        ProbeDefinition::new(
            ProbeDeclaration::new(ProbeKind::Builtin, "", name, ""),
            Predicate::always_true(),
            ActionBlock::from_raw(""),
        )
    }

    #[test]
    fn test_owned_iteration_keeps_order() {
        let program = Program::new(vec![builtin("BEGIN"), builtin("END")]);
        let names: Vec<String> = program
            .into_iter()
            .map(|probe| probe.declaration().function().to_string())
            .collect();
        assert_eq!(names, vec!["BEGIN", "END"]);
    }

    #[test]
    fn test_display_separates_probes() {
        let program = Program::new(vec![builtin("BEGIN"), builtin("END")]);
        assert_eq!(program.to_string(), "::BEGIN {\n\n}\n\n::END {\n\n}");
        assert!(Program::default().is_empty());
    }
}
