//! Probe declaration parsing
//!
//!     [p|r]:[library]:function[(signature)]
//!     ::function[(signature)]
//!
//! An explicit kind letter is followed by a library segment, which may be empty and then
//! means `kernel`. A leading `:` instead of a kind letter declares a builtin probe; builtins
//! have no library, so the second `:` follows immediately.

use super::error::{ParseError, ParseErrorKind};
use super::program::ProgramParser;
use crate::btrace::ast::{ProbeDeclaration, ProbeKind};
use crate::btrace::lexer::{BalancedPair, TokenKind};

impl<'a> ProgramParser<'a> {
    pub fn parse_probe_declaration(&mut self) -> Result<ProbeDeclaration, ParseError> {
        let kind = self.parse_probe_kind()?;
        let library = self.parse_library(kind)?;

        let token = self.tokenizer.next_token();
        let function = match (token.kind, token.text) {
            (TokenKind::Identifier, Some(name)) => name,
            _ => {
                return Err(ParseError::at_token(
                    ParseErrorKind::MissingFunction,
                    &token,
                    "expected function name",
                ))
            }
        };

        let signature = self.parse_signature()?;
        Ok(ProbeDeclaration::new(kind, library, function, signature))
    }

    fn parse_probe_kind(&mut self) -> Result<ProbeKind, ParseError> {
        let token = self.tokenizer.next_token();
        match token.kind {
            TokenKind::Identifier => {
                let kind = ProbeKind::from_discriminator(token.text_or_empty()).ok_or_else(|| {
                    ParseError::at_token(
                        ParseErrorKind::InvalidProbeType,
                        &token,
                        "probe type must be p or r",
                    )
                })?;
                self.expect(TokenKind::SpecSeparator, "`:` after probe type")?;
                Ok(kind)
            }
            TokenKind::SpecSeparator => Ok(ProbeKind::Builtin),
            _ => Err(ParseError::at_token(
                ParseErrorKind::UnexpectedToken,
                &token,
                "expected probe type or `:`",
            )),
        }
    }

    fn parse_library(&mut self, kind: ProbeKind) -> Result<String, ParseError> {
        let token = self.tokenizer.next_token();
        match token.kind {
            TokenKind::SpecSeparator => Ok(kind.default_library().to_string()),
            TokenKind::Identifier if kind == ProbeKind::Builtin => Err(ParseError::at_token(
                ParseErrorKind::BuiltinLibrary,
                &token,
                "builtin probes take no library, expected `:`",
            )),
            TokenKind::Identifier => {
                self.expect(TokenKind::SpecSeparator, "`:` after library")?;
                Ok(token.text_or_empty().to_string())
            }
            _ => Err(ParseError::at_token(
                ParseErrorKind::UnexpectedToken,
                &token,
                "expected library name or `:`",
            )),
        }
    }

    /// Optional `( ... )`; a following `/` or `{` is left for the next stage
    fn parse_signature(&mut self) -> Result<String, ParseError> {
        let token = self.tokenizer.next_token();
        match token.kind {
            TokenKind::OpenParen => {
                let raw = self.tokenizer.raw_token_until_balanced(BalancedPair::Paren);
                Ok(raw.text_or_empty().to_string())
            }
            TokenKind::PredicateSeparator | TokenKind::OpenBrace => {
                self.push_back(&token);
                Ok(String::new())
            }
            _ => Err(ParseError::at_token(
                ParseErrorKind::ExpectedPredicateOrAction,
                &token,
                "expected predicate or action",
            )),
        }
    }
}
