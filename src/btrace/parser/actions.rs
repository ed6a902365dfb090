//! Action block parsing

use super::error::{ParseError, ParseErrorKind};
use super::program::ProgramParser;
use crate::btrace::ast::ActionBlock;
use crate::btrace::lexer::{BalancedPair, TokenKind};

impl<'a> ProgramParser<'a> {
    /// Parse a required `{ ... }` block; nested braces stay part of the text
    pub fn parse_actions(&mut self) -> Result<ActionBlock, ParseError> {
        let token = self.tokenizer.next_token();
        if token.kind != TokenKind::OpenBrace {
            return Err(ParseError::at_token(
                ParseErrorKind::MissingActionBlock,
                &token,
                "expected actions block",
            ));
        }

        let raw = self.tokenizer.raw_token_until_balanced(BalancedPair::Brace);
        Ok(ActionBlock::from_raw(raw.text_or_empty()))
    }
}
