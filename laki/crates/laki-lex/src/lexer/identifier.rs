//! Identifier and keyword lexing.
//!
//! An identifier starts with an ASCII letter and continues with letters,
//! digits, or underscores. Lexemes found in the keyword table become
//! KEYWORD tokens.

use crate::token::{Keyword, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let start = self.cursor.position();

        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c.is_ascii_alphanumeric() || c == '_' {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let lexeme = self.cursor.slice_from(start);
        let kind = match Keyword::lookup(lexeme) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier(lexeme.to_string()),
        };
        Token::new(kind, self.span_from(start))
    }
}
