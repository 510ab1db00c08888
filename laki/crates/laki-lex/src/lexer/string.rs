//! String literal lexing.
//!
//! Strings are single-quoted. Inside a string `\` starts an escape:
//! `\n` and `\t` produce their control characters, any other escaped
//! character produces itself (so `\'` embeds a quote and `\\` a
//! backslash). A string left open at end of input closes silently.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a single-quoted string literal.
    pub(crate) fn lex_string(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();

        let mut text = String::new();
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c == '\\' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    break;
                }
                let escaped = self.cursor.current_char();
                text.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    other => other,
                });
                self.cursor.advance();
            } else if c == '\'' {
                self.cursor.advance();
                break;
            } else {
                text.push(c);
                self.cursor.advance();
            }
        }

        Token::new(TokenKind::Str(text), self.span_from(start))
    }
}
