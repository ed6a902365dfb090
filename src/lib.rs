//! # btrace
//!
//! A lexer and recursive-descent parser for btrace probe scripts.
//!
//! A script is a sequence of probe definitions of the form
//! `[probe_type:][library:]function[(signature)] [/predicate/] { actions }`.
//! Predicates and actions are kept as opaque text for the instrumentation
//! backend to interpret.
//!
//! ```text
//! p::__kmalloc(size_t size) /size > 4096/ {
//!     printf("%d\n", size);
//! }
//! ```

pub mod btrace;

pub use btrace::ast::{
    ActionBlock, Position, Predicate, ProbeDeclaration, ProbeDefinition, ProbeKind, Program,
};
pub use btrace::parser::{parse_program, ParseError, ParseErrorKind, ProgramParser};
