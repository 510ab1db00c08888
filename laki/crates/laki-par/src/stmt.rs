//! Statement-level parsing: statement lists and the three jump statements.

use laki_lex::Keyword;
use laki_util::Span;

use crate::ast::{BreakNode, ContinueNode, ListNode, Node, ReturnNode};
use crate::{ParseResult, Parser};

impl<'a> Parser<'a> {
    /// statements = NEWLINE* statement (NEWLINE+ statement)* NEWLINE*
    ///
    /// The result is a [`ListNode`]; evaluating it yields the list of
    /// per-statement values. After the first statement, each further
    /// statement must be preceded by at least one NEWLINE; a failed
    /// speculative statement parse ends the list (the enclosing rule then
    /// decides whether what follows is legal).
    pub(crate) fn statements(&mut self) -> ParseResult<Node> {
        let start = self.current().span.start;
        let mut statements = Vec::new();

        self.skip_newlines();
        statements.push(self.statement()?);

        loop {
            if self.skip_newlines() == 0 {
                break;
            }
            match self.try_parse(Self::statement) {
                Some(statement) => statements.push(statement),
                None => break,
            }
        }

        let span = Span::new(start, self.current().span.end);
        Ok(Node::List(ListNode {
            elements: statements,
            span,
        }))
    }

    /// statement = "return" expr? | "continue" | "break" | expr
    pub(crate) fn statement(&mut self) -> ParseResult<Node> {
        let start = self.current().span.start;

        if self.current().is_keyword(Keyword::Return) {
            self.advance();
            // the return value is optional, so the expression parse is
            // speculative
            let value = self.try_parse(Self::expr);
            let span = Span::new(start, self.current().span.start);
            return Ok(Node::Return(ReturnNode {
                value: value.map(Box::new),
                span,
            }));
        }

        if self.current().is_keyword(Keyword::Continue) {
            self.advance();
            let span = Span::new(start, self.current().span.start);
            return Ok(Node::Continue(ContinueNode { span }));
        }

        if self.current().is_keyword(Keyword::Break) {
            self.advance();
            let span = Span::new(start, self.current().span.start);
            return Ok(Node::Break(BreakNode { span }));
        }

        self.expr()
    }
}
