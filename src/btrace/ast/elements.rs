//! Probe script element definitions

pub mod actions;
pub mod declaration;
pub mod definition;
pub mod predicate;
pub mod program;

pub use actions::ActionBlock;
pub use declaration::{ProbeDeclaration, ProbeKind};
pub use definition::ProbeDefinition;
pub use predicate::Predicate;
pub use program::Program;
