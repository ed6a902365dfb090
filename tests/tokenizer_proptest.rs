//! Property-based tests for the tokenizer and the declaration parser
//!
//! These tests ensure that the tokenizer handles arbitrary text without panicking, that
//! its positions only move forward, and that rewinding a token reproduces it exactly.

use btrace::btrace::lexer::{tokenize, BalancedPair, TokenKind, Tokenizer};
use btrace::{parse_program, ProbeDeclaration, ProbeKind};
use proptest::prelude::*;

const SPECIALS: [char; 6] = [':', '/', '{', '}', '(', ')'];

/// Script-like text: lots of specials and whitespace mixed with identifier characters
fn script_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9_*&<>= :/{}()\t\n]{0,64}",
        "\\PC{0,32}",
    ]
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_.]{0,12}"
}

fn probe_declaration() -> impl Strategy<Value = ProbeDeclaration> {
    let kind = prop_oneof![
        Just(ProbeKind::Entry),
        Just(ProbeKind::Return),
        Just(ProbeKind::Builtin),
    ];
    (kind, identifier(), identifier(), "[a-z0-9_ ,*]{0,24}").prop_map(
        |(kind, library, function, signature)| {
            let library = match kind {
                ProbeKind::Builtin => String::new(),
                _ => library,
            };
            ProbeDeclaration::new(kind, library, function, signature)
        },
    )
}

proptest! {
    #[test]
    fn tokenize_always_ends_with_single_eof(source in script_text()) {
        let tokens = tokenize(&source);
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn token_positions_increase(source in script_text()) {
        let tokens = tokenize(&source);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].position < pair[1].position);
        }
    }

    #[test]
    fn identifiers_contain_no_specials_or_whitespace(source in script_text()) {
        for token in tokenize(&source) {
            if token.kind == TokenKind::Identifier {
                let text = token.text_or_empty();
                prop_assert!(!text.is_empty());
                prop_assert!(!text.chars().any(|c| c.is_whitespace() || SPECIALS.contains(&c)));
            }
            if token.kind.is_special() {
                prop_assert_eq!(token.char_len(), 1);
            }
        }
    }

    #[test]
    fn rewind_reproduces_token(source in script_text()) {
        let mut tokenizer = Tokenizer::new(&source);
        loop {
            let token = tokenizer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            tokenizer.rewind(token.char_len());
            prop_assert_eq!(tokenizer.next_token(), token);
        }
    }

    #[test]
    fn balanced_scan_returns_prefix(source in script_text(), brace in any::<bool>()) {
        let pair = if brace { BalancedPair::Brace } else { BalancedPair::Paren };
        let mut tokenizer = Tokenizer::new(&source);
        let raw = tokenizer.raw_token_until_balanced(pair);
        let text = raw.text_or_empty();

        prop_assert!(source.starts_with(text));

        // The captured text never closes more than it opens
        let mut depth = 0i64;
        for c in text.chars() {
            if c == pair.opener() {
                depth += 1;
            } else if c == pair.closer() {
                depth -= 1;
            }
            prop_assert!(depth >= 0);
        }
    }

    #[test]
    fn raw_scan_stops_at_first_delimiter(source in script_text()) {
        let mut tokenizer = Tokenizer::new(&source);
        let raw = tokenizer.raw_token_until('/');
        let text = raw.text_or_empty();
        prop_assert!(!text.contains('/'));
        prop_assert!(source.starts_with(text));
    }

    #[test]
    fn rendered_declaration_parses_back(decl in probe_declaration()) {
        let script = format!("{} {{ }}", decl);
        let program = parse_program(&script).unwrap();
        prop_assert_eq!(program.len(), 1);
        prop_assert_eq!(program.probes()[0].declaration(), &decl);
    }
}
