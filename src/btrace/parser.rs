//! Recursive-descent parser for probe scripts
//!
//!     Each probe is read in three fixed stages, one per submodule, all driven by the same
//!     [ProgramParser] and its [Tokenizer](crate::btrace::lexer::Tokenizer):
//!
//!         1. [declaration]: `[p|r]:[library]:function[(signature)]`
//!         2. [predicate]: optional `/guard/`, defaulting to the always-true guard `1`
//!         3. [actions]: required `{ ... }` block, split into lines
//!
//!     The [program] module loops over these stages until the input is exhausted.
//!
//! Look-ahead
//!
//!     The grammar needs at most one token of look-ahead: after the function name and after
//!     the declaration, the next token may belong to the following stage. The parser reads it
//!     and, if it is not its own, rewinds the tokenizer by the token's length.
//!
//! Errors
//!
//!     The first structural error ends the parse. There is no recovery and no partial program;
//!     see [ParseError].

pub mod actions;
pub mod declaration;
pub mod error;
pub mod predicate;
pub mod program;

pub use error::{ParseError, ParseErrorKind};
pub use program::ProgramParser;

use crate::btrace::ast::Program;

/// Parse a complete probe script
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    ProgramParser::new(source).parse()
}
