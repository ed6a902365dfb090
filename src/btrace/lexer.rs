//! Lexer module for btrace probe scripts
//!
//! The script grammar only has six structural characters (`:`, `/`, `{`, `}`, `(`, `)`);
//! everything else is either whitespace or part of an identifier. Those are recognized by
//! a logos lexer (see [tokens]).
//!
//! Signatures, predicates and action blocks are not tokenized at all. The parser switches
//! the [Tokenizer] into a raw capture mode once it has seen the opening delimiter and takes
//! the text verbatim up to the closing one. Because of that the tokenizer is pull-based: the
//! parser decides, token by token, how the next stretch of input is read.

pub mod tokenizer;
pub mod tokens;

pub use tokenizer::{BalancedPair, Tokenizer};
pub use tokens::{Token, TokenKind};

/// Convenience function to tokenize a whole script in structural mode
///
/// The returned vector always ends with a single [TokenKind::Eof] token. Raw capture modes
/// are never entered, so signature and action text shows up as identifiers and specials.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = tokenizer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_ends_with_eof() {
        let tokens = tokenize("p::kfree {}");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::SpecSeparator,
                TokenKind::SpecSeparator,
                TokenKind::Identifier,
                TokenKind::OpenBrace,
                TokenKind::CloseBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].text, None);
    }
}
