//! Edge case tests for laki-lex


#[cfg(test)]
mod properties {
    use crate::{Lexer, TokenKind};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lexing_never_panics(source in ".*") {
            let _ = Lexer::new("<prop>", &source).tokenize();
        }

        #[test]
        fn token_spans_are_monotonic(source in "[a-z0-9+*/ =<>(){}\\[\\],;\n'.-]*") {
            if let Ok(tokens) = Lexer::new("<prop>", &source).tokenize() {
                for token in &tokens {
                    prop_assert!(token.span.end.index >= token.span.start.index);
                }
                for pair in tokens.windows(2) {
                    prop_assert!(pair[1].span.start.index >= pair[0].span.start.index);
                }
                prop_assert_eq!(&tokens.last().unwrap().kind, &TokenKind::Eof);
            }
        }
    }
}
