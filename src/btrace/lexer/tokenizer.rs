//! Pull-based tokenizer with position tracking and raw capture modes
//!
//! The tokenizer owns a byte cursor into the script plus the 1-based line and column of that
//! cursor. Structural tokens are recognized by the logos lexer in [tokens](super::tokens);
//! the cursor is then advanced over the matched slice character by character so line and
//! column stay exact.
//!
//! Raw Modes
//!
//!     [Tokenizer::raw_token_until] takes everything up to a single delimiter character.
//!     [Tokenizer::raw_token_until_balanced] takes everything up to the closer that balances an
//!     opener the caller already consumed, counting nested openers of the same pair. Both
//!     consume the terminating character without returning it, and both stop silently at end
//!     of input, returning whatever was captured.

use super::tokens::{Token, TokenKind};
use crate::btrace::ast::Position;
use logos::Logos;
use std::fmt;
use tracing::trace;

/// The delimiter pairs a balanced scan knows how to count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalancedPair {
    /// `(` ... `)`
    Paren,
    /// `{` ... `}`
    Brace,
}

impl BalancedPair {
    /// Resolve either member of a supported pair
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '(' | ')' => Some(BalancedPair::Paren),
            '{' | '}' => Some(BalancedPair::Brace),
            _ => None,
        }
    }

    pub fn opener(self) -> char {
        match self {
            BalancedPair::Paren => '(',
            BalancedPair::Brace => '{',
        }
    }

    pub fn closer(self) -> char {
        match self {
            BalancedPair::Paren => ')',
            BalancedPair::Brace => '}',
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Byte offset of the cursor
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Line and column of the cursor
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_at_end(&self) -> bool {
        self.offset == self.source.len()
    }

    pub fn remaining_text(&self) -> &'a str {
        &self.source[self.offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining_text().chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Advance over `len` bytes of the remaining text
    fn advance(&mut self, len: usize) {
        let end = self.offset + len;
        while self.offset < end {
            if self.next_char().is_none() {
                break;
            }
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.next_char();
        }
    }

    /// Read the next structural token
    ///
    /// Once the input is exhausted every call returns [TokenKind::Eof].
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        let rest = self.remaining_text();
        let mut lexer = TokenKind::lexer(rest);

        let kind = match lexer.next() {
            None => return Token::eof(self.position()),
            Some(Ok(kind)) => kind,
            // Every character is either whitespace, a special or part of an identifier
            Some(Err(())) => TokenKind::Identifier,
        };
        let span = lexer.span();

        self.advance(span.start);
        let position = self.position();
        self.advance(span.end - span.start);

        let token = Token::new(kind, &rest[span], position);
        trace!(kind = %token.kind, %position, "token");
        token
    }

    /// Capture text verbatim up to (not including) `delimiter`
    ///
    /// The delimiter itself is consumed. Without a delimiter the rest of the input is returned.
    pub fn raw_token_until(&mut self, delimiter: char) -> Token<'a> {
        let position = self.position();
        let start = self.offset;

        loop {
            let end = self.offset;
            match self.next_char() {
                Some(ch) if ch != delimiter => continue,
                _ => return Token::raw(&self.source[start..end], position),
            }
        }
    }

    /// Capture text verbatim up to the closer balancing an already consumed opener
    ///
    /// Only the opener and closer of `pair` are counted, other brackets pass through as plain
    /// text. The balancing closer is consumed but not part of the returned text.
    pub fn raw_token_until_balanced(&mut self, pair: BalancedPair) -> Token<'a> {
        let (opener, closer) = (pair.opener(), pair.closer());
        let position = self.position();
        let start = self.offset;
        let mut depth = 1usize;

        loop {
            let end = self.offset;
            match self.next_char() {
                None => break,
                Some(ch) if ch == opener => depth += 1,
                Some(ch) if ch == closer => {
                    depth -= 1;
                    if depth == 0 {
                        return Token::raw(&self.source[start..end], position);
                    }
                }
                Some(_) => {}
            }
        }

        trace!(%position, "balanced scan ran out of input");
        Token::raw(&self.source[start..], position)
    }

    /// Move the cursor back by `count` characters, never past the start of the text
    pub fn rewind(&mut self, count: usize) {
        let consumed = &self.source[..self.offset];
        let mut crossed_newline = false;

        for ch in consumed.chars().rev().take(count) {
            self.offset -= ch.len_utf8();
            if ch == '\n' {
                self.line -= 1;
                crossed_newline = true;
            } else if !crossed_newline {
                self.column -= 1;
            }
        }

        if crossed_newline {
            let line_start = self.source[..self.offset]
                .rfind('\n')
                .map(|i| i + 1)
                .unwrap_or(0);
            self.column = self.source[line_start..self.offset].chars().count() + 1;
        }
    }
}

impl fmt::Display for Tokenizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}###{} [pos={}]",
            &self.source[..self.offset],
            self.remaining_text(),
            self.offset
        )
    }
}
