//! laki-par - Parser (Syntactic Analyzer)
//!
//! ============================================================================
//! GRAMMAR
//! ============================================================================
//!
//! A hand-written recursive-descent parser over the token stream. Each
//! non-terminal has a corresponding method; left recursion is expressed as
//! iteration (`expr := term { op term }`), so the grammar is processed
//! top-down without backtracking except where noted.
//!
//! ```ebnf
//! program     = statements EOF
//! statements  = NEWLINE* statement (NEWLINE+ statement)* NEWLINE*
//! statement   = "return" expr?
//!             | "continue"
//!             | "break"
//!             | expr
//! expr        = "var" IDENT "=" expr
//!             | IDENT ("=" | "+=" | "-=" | "*=" | "/=" | "**=" | "%=") expr
//!             | comp (("and" | "or") comp)*
//! comp        = "not" comp
//!             | arith (("==" | "!=" | "<" | ">" | "<=" | ">=") arith)*
//! arith       = term (("+" | "-") term)*
//! term        = factor (("*" | "/" | "%") factor)*
//! factor      = ("+" | "-") factor | power
//! power       = call ("**" factor)*
//! call        = atom ("(" (expr ("," expr)*)? ")")?
//! atom        = INT | FLOAT | STRING | IDENT
//!             | "(" expr ")"
//!             | "[" (expr ("," expr)*)? "]"
//!             | if-expr | for-expr | while-expr | func-expr
//! if-expr     = "if" expr "{" statements "}"
//!               ("elif" expr "{" statements "}")*
//!               ("else" "{" statements "}")?
//! for-expr    = "for" IDENT "=" expr "to" expr ("step" expr)?
//!               "{" statements "}"
//! while-expr  = "while" expr "{" statements "}"
//! func-expr   = "func" IDENT? "(" (IDENT ("," IDENT)*)? ")" "->"
//!               (expr | "{" statements "}")
//! ```
//!
//! ASSOCIATIVITY:
//! --------------
//! All binary operators are left-associative except `**`, whose right
//! operand recurses into `factor`, making it right-associative:
//! `2 ** 3 ** 2` parses as `2 ** (3 ** 2)`.
//!
//! SPECULATIVE PARSING:
//! --------------------
//! Three places need lookahead beyond one token and use checkpointed
//! rollback (`reverse`): the optional value of `return`, the "is another
//! statement following these newlines" decision in `statements`, and the
//! `elif`/`else` continuation after the NEWLINE that the lexer injects
//! behind every `}`.
//!
//! After a successful parse the current token must be EOF, otherwise the
//! parse fails.

pub mod ast;
mod edge_cases;
mod expr;
mod stmt;

pub use ast::{
    AssignOp, BinOp, BinaryNode, BreakNode, CallNode, ContinueNode, ForNode, FuncNode, IfNode,
    ListNode, Node, NumberLit, NumberNode, ReturnNode, StrNode, UnOp, UnaryNode, VarAccessNode,
    VarAssignNode, WhileNode,
};

use std::rc::Rc;

use laki_lex::{Token, TokenKind};
use laki_util::{LakiError, Span};

/// Result type for parsing operations.
pub type ParseResult<T> = std::result::Result<T, Box<LakiError>>;

/// Recursive-descent parser over a token vector.
pub struct Parser<'a> {
    /// The token stream, always terminated by EOF.
    tokens: Vec<Token>,

    /// Index of the current token.
    pos: usize,

    /// File name used in error reports.
    file: &'a str,
}

impl<'a> Parser<'a> {
    /// Creates a parser for a token stream.
    pub fn new(file: &'a str, mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            tokens.push(Token::new(TokenKind::Eof, Span::DUMMY));
        }
        Self {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Parses a complete program.
    ///
    /// The returned root is always a [`ListNode`] of statements. Fails if
    /// any input remains after the statement list.
    pub fn parse(mut self) -> ParseResult<Node> {
        let root = self.statements()?;
        if !self.current().is_eof() {
            return Err(self.syntax_error("Expected '+', '-', '*' or '/'"));
        }
        Ok(root)
    }

    /// The current token. Never advances past EOF.
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Advance to the next token, stopping at EOF.
    pub(crate) fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Move the cursor back `n` tokens.
    pub(crate) fn reverse(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    /// Attempt a sub-parse; on failure the cursor is rolled back to where
    /// the attempt started and `None` is returned.
    pub(crate) fn try_parse<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> Option<T> {
        let mark = self.pos;
        match f(self) {
            Ok(value) => Some(value),
            Err(_) => {
                let advanced = self.pos - mark;
                self.reverse(advanced);
                None
            }
        }
    }

    /// Consume any run of NEWLINE tokens.
    pub(crate) fn skip_newlines(&mut self) -> usize {
        let mut count = 0;
        while self.current().is_newline() {
            self.advance();
            count += 1;
        }
        count
    }

    /// Consume an identifier, yielding its name and span.
    pub(crate) fn expect_identifier(&mut self) -> ParseResult<(Rc<str>, Span)> {
        let span = self.current().span;
        if let TokenKind::Identifier(name) = &self.current().kind {
            let name: Rc<str> = Rc::from(name.as_str());
            self.advance();
            Ok((name, span))
        } else {
            Err(self.syntax_error("Expected identifier"))
        }
    }

    /// Consume the given token kind or fail with the given message.
    pub(crate) fn expect(&mut self, kind: TokenKind, detail: &str) -> ParseResult<()> {
        if self.current().kind == kind {
            self.advance();
            Ok(())
        } else {
            Err(self.syntax_error(detail))
        }
    }

    /// An invalid-syntax error at the current token.
    pub(crate) fn syntax_error(&self, detail: &str) -> Box<LakiError> {
        Box::new(LakiError::invalid_syntax(
            self.current().span,
            self.file,
            detail,
        ))
    }
}
