//! Operator and punctuation lexing.
//!
//! Each method consumes one operator family, folding the compound-assign
//! and multi-character forms into single tokens.

use laki_util::LakiError;

use crate::token::{Token, TokenKind};
use crate::{Lexer, LexResult};

impl<'a> Lexer<'a> {
    /// Lexes plus or plus-equals.
    ///
    /// Handles: `+`, `+=`
    pub(crate) fn lex_plus(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::PlusEq
        } else {
            TokenKind::Plus
        };
        Token::new(kind, self.span_from(start))
    }

    /// Lexes minus, minus-equals, or arrow.
    ///
    /// Handles: `-`, `-=`, `->`
    pub(crate) fn lex_minus(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::MinusEq
        } else if self.cursor.match_char('>') {
            TokenKind::Arrow
        } else {
            TokenKind::Minus
        };
        Token::new(kind, self.span_from(start))
    }

    /// Lexes star, power, or their compound-assign forms.
    ///
    /// Handles: `*`, `*=`, `**`, `**=`
    pub(crate) fn lex_star(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        let kind = if self.cursor.match_char('*') {
            if self.cursor.match_char('=') {
                TokenKind::PowEq
            } else {
                TokenKind::Pow
            }
        } else if self.cursor.match_char('=') {
            TokenKind::MulEq
        } else {
            TokenKind::Mul
        };
        Token::new(kind, self.span_from(start))
    }

    /// Lexes slash, slash-equals, or a line comment.
    ///
    /// Handles: `/`, `/=`, `//`. A comment is consumed up to the next
    /// newline (the newline itself is left for the scanning loop, so the
    /// statement separator survives) and produces no token.
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        let start = self.cursor.position();
        self.cursor.advance();
        if self.cursor.current_char() == '/' {
            while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                self.cursor.advance();
            }
            return None;
        }
        let kind = if self.cursor.match_char('=') {
            TokenKind::DivEq
        } else {
            TokenKind::Div
        };
        Some(Token::new(kind, self.span_from(start)))
    }

    /// Lexes percent or percent-equals.
    ///
    /// Handles: `%`, `%=`
    pub(crate) fn lex_percent(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::ModEq
        } else {
            TokenKind::Mod
        };
        Token::new(kind, self.span_from(start))
    }

    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::Ee
        } else {
            TokenKind::Eq
        };
        Token::new(kind, self.span_from(start))
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::Lte
        } else {
            TokenKind::Lt
        };
        Token::new(kind, self.span_from(start))
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::Gte
        } else {
            TokenKind::Gt
        };
        Token::new(kind, self.span_from(start))
    }

    /// Lexes not-equals.
    ///
    /// `!` is only valid as the start of `!=`; anything else is an
    /// expected-character error spanning the `!` and the offending
    /// character.
    pub(crate) fn lex_bang(&mut self) -> LexResult<Token> {
        let start = self.cursor.position();
        self.cursor.advance();
        if self.cursor.match_char('=') {
            return Ok(Token::new(TokenKind::Ne, self.span_from(start)));
        }
        self.cursor.advance();
        Err(Box::new(LakiError::expected_char(
            self.span_from(start),
            self.file,
            "The character after '!' should be '='",
        )))
    }
}
