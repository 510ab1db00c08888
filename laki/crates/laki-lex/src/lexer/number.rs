//! Number literal lexing.
//!
//! Consumes digits with at most one decimal point; digits alone produce an
//! INT token, a decimal point anywhere produces FLOAT. A second dot ends
//! the literal (`1.2.3` lexes as `1.2` followed by an illegal `.`).

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or floating-point literal.
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        let mut saw_dot = false;

        loop {
            let c = self.cursor.current_char();
            if c == '.' {
                if saw_dot {
                    break;
                }
                saw_dot = true;
                self.cursor.advance();
            } else if c.is_ascii_digit() {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let text = self.cursor.slice_from(start);
        let span = self.span_from(start);

        if saw_dot {
            Token::new(TokenKind::Float(text.parse().unwrap_or(0.0)), span)
        } else {
            match text.parse::<i64>() {
                Ok(value) => Token::new(TokenKind::Int(value), span),
                // Out of i64 range: fall back to a float literal
                Err(_) => Token::new(
                    TokenKind::Float(text.parse().unwrap_or(f64::INFINITY)),
                    span,
                ),
            }
        }
    }
}
