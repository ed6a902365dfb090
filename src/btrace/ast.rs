//! Structured output of the parser
//!
//! A [Program] is an ordered list of [ProbeDefinition]s, each made of a [ProbeDeclaration]
//! (what to hook), a [Predicate] (when to fire) and an [ActionBlock] (what to run). Predicate
//! and action text are stored verbatim; interpreting them is up to the instrumentation
//! backend.

pub mod elements;
pub mod position;

pub use elements::{
    ActionBlock, Predicate, ProbeDeclaration, ProbeDefinition, ProbeKind, Program,
};
pub use position::Position;
