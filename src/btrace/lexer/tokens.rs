//! Token definitions for btrace probe scripts
//!
//! The structural tokens are defined using the logos derive macro. Whitespace is skipped by
//! the lexer itself; any run of characters that is neither whitespace nor one of the six
//! special characters is an identifier. `Raw` and `Eof` are never produced by logos, they
//! are created by the [Tokenizer](super::Tokenizer) for raw captures and exhausted input.
use crate::btrace::ast::Position;
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible token kinds in a probe script
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// `:` between probe type, library and function
    #[token(":")]
    SpecSeparator,

    /// `/` around a predicate
    #[token("/")]
    PredicateSeparator,

    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    #[regex(r"[^\s:/{}()]+")]
    Identifier,

    /// Verbatim text captured by one of the raw modes
    Raw,

    Eof,
}

impl TokenKind {
    /// Check if this kind is one of the six single-character specials
    pub fn is_special(&self) -> bool {
        matches!(
            self,
            TokenKind::SpecSeparator
                | TokenKind::PredicateSeparator
                | TokenKind::OpenBrace
                | TokenKind::CloseBrace
                | TokenKind::OpenParen
                | TokenKind::CloseParen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::SpecSeparator => "spec-separator",
            TokenKind::PredicateSeparator => "predicate-separator",
            TokenKind::OpenBrace => "open-brace",
            TokenKind::CloseBrace => "close-brace",
            TokenKind::OpenParen => "open-paren",
            TokenKind::CloseParen => "close-paren",
            TokenKind::Identifier => "identifier",
            TokenKind::Raw => "raw",
            TokenKind::Eof => "eof",
        };
        f.write_str(name)
    }
}

/// A token together with its source text and starting position
///
/// The text borrows from the script source. It is `None` only for [TokenKind::Eof].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: Option<&'a str>,
    pub position: Position,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, position: Position) -> Self {
        Self {
            kind,
            text: Some(text),
            position,
        }
    }

    pub fn raw(text: &'a str, position: Position) -> Self {
        Self::new(TokenKind::Raw, text, position)
    }

    pub fn eof(position: Position) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: None,
            position,
        }
    }

    /// The token text, or `""` for end of input
    pub fn text_or_empty(&self) -> &'a str {
        self.text.unwrap_or("")
    }

    /// Length of the token text in characters
    ///
    /// This is the amount the tokenizer has to be rewound to read the token again.
    pub fn char_len(&self) -> usize {
        self.text_or_empty().chars().count()
    }

    /// Human readable description used in parse errors
    pub fn describe(&self) -> String {
        match (self.kind, self.text) {
            (TokenKind::Eof, _) | (_, None) => "end of input".to_string(),
            (TokenKind::Identifier, Some(text)) => format!("identifier `{}`", text),
            (TokenKind::Raw, Some(text)) => format!("raw text `{}`", text),
            (_, Some(text)) => format!("`{}`", text),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text {
            Some(text) => write!(f, "{} {} {:?}", self.position, self.kind, text),
            None => write!(f, "{} {}", self.position, self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenKind::lexer(source)
            .filter_map(|result| result.ok())
            .collect()
    }

    #[test]
    fn test_specials() {
        assert_eq!(
            kinds(": / { } ( )"),
            vec![
                TokenKind::SpecSeparator,
                TokenKind::PredicateSeparator,
                TokenKind::OpenBrace,
                TokenKind::CloseBrace,
                TokenKind::OpenParen,
                TokenKind::CloseParen,
            ]
        );
    }

    #[test]
    fn test_identifier_stops_at_special() {
        let mut lexer = TokenKind::lexer("__kmalloc(size_t");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Identifier)));
        assert_eq!(lexer.slice(), "__kmalloc");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::OpenParen)));
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Identifier)));
        assert_eq!(lexer.slice(), "size_t");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_identifier_keeps_punctuation() {
        let mut lexer = TokenKind::lexer("a&&b>17;");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Identifier)));
        assert_eq!(lexer.slice(), "a&&b>17;");
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(kinds(" \t\n "), Vec::<TokenKind>::new());
        assert_eq!(kinds("  ident123 \n"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_is_special() {
        assert!(TokenKind::SpecSeparator.is_special());
        assert!(TokenKind::CloseParen.is_special());
        assert!(!TokenKind::Identifier.is_special());
        assert!(!TokenKind::Raw.is_special());
        assert!(!TokenKind::Eof.is_special());
    }

    #[test]
    fn test_describe() {
        let pos = Position::new(1, 1);
        assert_eq!(
            Token::new(TokenKind::Identifier, "x", pos).describe(),
            "identifier `x`"
        );
        assert_eq!(Token::new(TokenKind::OpenBrace, "{", pos).describe(), "`{`");
        assert_eq!(Token::eof(pos).describe(), "end of input");
    }

    #[test]
    fn test_char_len_counts_characters() {
        let pos = Position::new(1, 1);
        assert_eq!(Token::new(TokenKind::Identifier, "wörld", pos).char_len(), 5);
        assert_eq!(Token::eof(pos).char_len(), 0);
    }
}
