//! Predicate parsing
//!
//! The guard is taken verbatim up to the next `/`. There is no escape for a `/` inside the
//! guard, so a division in a predicate ends it early.

use super::program::ProgramParser;
use crate::btrace::ast::Predicate;
use crate::btrace::lexer::TokenKind;

impl<'a> ProgramParser<'a> {
    /// Parse an optional `/guard/`
    ///
    /// Anything other than `/` is left in place for the action block stage, which reports it
    /// if it is not `{`.
    pub fn parse_predicate(&mut self) -> Predicate {
        let token = self.tokenizer.next_token();
        if token.kind != TokenKind::PredicateSeparator {
            self.push_back(&token);
            return Predicate::always_true();
        }

        let raw = self.tokenizer.raw_token_until('/');
        Predicate::new(raw.text_or_empty())
    }
}
