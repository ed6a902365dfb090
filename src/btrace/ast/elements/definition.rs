//! Probe definition element definition

use super::actions::ActionBlock;
use super::declaration::ProbeDeclaration;
use super::predicate::Predicate;
use serde::Serialize;
use std::fmt;

/// One complete `declaration /predicate/ { actions }` triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeDefinition {
    declaration: ProbeDeclaration,
    predicate: Predicate,
    actions: ActionBlock,
}

impl ProbeDefinition {
    pub fn new(declaration: ProbeDeclaration, predicate: Predicate, actions: ActionBlock) -> Self {
        Self {
            declaration,
            predicate,
            actions,
        }
    }

    pub fn declaration(&self) -> &ProbeDeclaration {
        &self.declaration
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn actions(&self) -> &ActionBlock {
        &self.actions
    }
}

/// Renders back into script notation
impl fmt::Display for ProbeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.declaration)?;
        if !self.predicate.is_always_true() {
            write!(f, "/{}/ ", self.predicate)?;
        }
        write!(f, "{{\n{}\n}}", self.actions)
    }
}
