//! Core lexer implementation.
//!
//! This module contains the main [`Lexer`] struct, the scanning loop, and
//! the dispatch on the current character.

use laki_util::{LakiError, Position, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::LexResult;

/// Lexer for LakiScript source text.
///
/// The lexer transforms source code into a stream of tokens, skipping
/// spaces and tabs, turning `\n` and `;` into NEWLINE tokens, and
/// stripping line comments.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// File name used in error reports.
    pub(crate) file: &'a str,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given file name and source text.
    pub fn new(file: &'a str, source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            file,
        }
    }

    /// Scans the entire source into a token sequence.
    ///
    /// On success the final token is always EOF. The first illegal
    /// character or incomplete operator aborts the scan with an error
    /// spanning the offending characters.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();

        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            match c {
                ' ' | '\t' => self.cursor.advance(),
                '\n' | ';' => tokens.push(self.single(TokenKind::Newline)),
                '0'..='9' => tokens.push(self.lex_number()),
                'a'..='z' | 'A'..='Z' => tokens.push(self.lex_identifier()),
                '\'' => tokens.push(self.lex_string()),
                '=' => tokens.push(self.lex_equals()),
                '<' => tokens.push(self.lex_less()),
                '>' => tokens.push(self.lex_greater()),
                '!' => tokens.push(self.lex_bang()?),
                '+' => tokens.push(self.lex_plus()),
                '-' => tokens.push(self.lex_minus()),
                '*' => tokens.push(self.lex_star()),
                '/' => {
                    if let Some(token) = self.lex_slash() {
                        tokens.push(token);
                    }
                }
                '%' => tokens.push(self.lex_percent()),
                '(' => tokens.push(self.single(TokenKind::LParen)),
                ')' => tokens.push(self.single(TokenKind::RParen)),
                '{' => tokens.push(self.single(TokenKind::LBrace)),
                '}' => {
                    let brace = self.single(TokenKind::RBrace);
                    let span = brace.span;
                    tokens.push(brace);
                    // `}` also terminates the statement list it closes
                    tokens.push(Token::new(TokenKind::Newline, span));
                }
                '[' => tokens.push(self.single(TokenKind::LBracket)),
                ']' => tokens.push(self.single(TokenKind::RBracket)),
                ',' => tokens.push(self.single(TokenKind::Comma)),
                _ => {
                    let start = self.cursor.position();
                    self.cursor.advance();
                    return Err(Box::new(LakiError::illegal_char(
                        self.span_from(start),
                        self.file,
                        format!("'{c}'"),
                    )));
                }
            }
        }

        tokens.push(Token::new(
            TokenKind::Eof,
            Span::point(self.cursor.position()),
        ));
        Ok(tokens)
    }

    /// Emits a token covering exactly the current character.
    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        Token::new(kind, self.span_from(start))
    }

    /// Span from `start` up to the cursor's current position.
    pub(crate) fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.cursor.position())
    }
}
