//! Program-level parsing: drives the three probe stages until end of input

use super::error::{ParseError, ParseErrorKind};
use crate::btrace::ast::{ProbeDefinition, Program};
use crate::btrace::lexer::{Token, TokenKind, Tokenizer};
use tracing::debug;

/// Parser for one script
///
/// The stage methods ([parse_probe_declaration](Self::parse_probe_declaration),
/// [parse_predicate](Self::parse_predicate), [parse_actions](Self::parse_actions)) are public
/// so a single stage can be parsed from a fragment.
#[derive(Debug, Clone)]
pub struct ProgramParser<'a> {
    pub(super) tokenizer: Tokenizer<'a>,
}

impl<'a> ProgramParser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer<'a> {
        &self.tokenizer
    }

    /// Parse every probe definition in the script
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut probes = Vec::new();

        loop {
            self.tokenizer.skip_whitespace();
            if self.tokenizer.is_at_end() {
                break;
            }

            let declaration = self.parse_probe_declaration()?;
            let predicate = self.parse_predicate();
            let actions = self.parse_actions()?;

            debug!(
                probe = %declaration,
                predicate = %predicate,
                lines = actions.lines().len(),
                "parsed probe"
            );
            probes.push(ProbeDefinition::new(declaration, predicate, actions));
        }

        debug!(count = probes.len(), "parsed program");
        Ok(Program::new(probes))
    }

    /// Read the next token and require it to be of `kind`
    pub(super) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &str,
    ) -> Result<Token<'a>, ParseError> {
        let token = self.tokenizer.next_token();
        if token.kind != kind {
            return Err(ParseError::at_token(
                ParseErrorKind::UnexpectedToken,
                &token,
                &format!("expected {}", expected),
            ));
        }
        Ok(token)
    }

    /// Un-read a look-ahead token so the next stage sees it again
    pub(super) fn push_back(&mut self, token: &Token<'a>) {
        self.tokenizer.rewind(token.char_len());
    }
}
