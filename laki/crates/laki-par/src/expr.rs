//! Expression parsing: the precedence chain from `expr` down to `atom`,
//! plus the braced constructs (`if`, `for`, `while`, `func`, lists) that
//! are themselves expressions.

use std::rc::Rc;

use laki_lex::{Keyword, TokenKind};
use laki_util::Span;

use crate::ast::{
    AssignOp, BinOp, BinaryNode, CallNode, ForNode, FuncNode, IfNode, ListNode, Node, NumberLit,
    NumberNode, StrNode, UnOp, UnaryNode, VarAccessNode, VarAssignNode, WhileNode,
};
use crate::{ParseResult, Parser};

/// Maps an operator token to its binary operator, if any.
fn binop_of(kind: &TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Plus => Some(BinOp::Add),
        TokenKind::Minus => Some(BinOp::Sub),
        TokenKind::Mul => Some(BinOp::Mul),
        TokenKind::Div => Some(BinOp::Div),
        TokenKind::Pow => Some(BinOp::Pow),
        TokenKind::Mod => Some(BinOp::Mod),
        TokenKind::Ee => Some(BinOp::Ee),
        TokenKind::Ne => Some(BinOp::Ne),
        TokenKind::Lt => Some(BinOp::Lt),
        TokenKind::Gt => Some(BinOp::Gt),
        TokenKind::Lte => Some(BinOp::Lte),
        TokenKind::Gte => Some(BinOp::Gte),
        TokenKind::Keyword(Keyword::And) => Some(BinOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(BinOp::Or),
        _ => None,
    }
}

/// Maps an assignment token (`=` or a compound form) to its operator.
fn assign_op_of(kind: &TokenKind) -> Option<AssignOp> {
    match kind {
        TokenKind::Eq => Some(AssignOp::Assign),
        TokenKind::PlusEq => Some(AssignOp::AddAssign),
        TokenKind::MinusEq => Some(AssignOp::SubAssign),
        TokenKind::MulEq => Some(AssignOp::MulAssign),
        TokenKind::DivEq => Some(AssignOp::DivAssign),
        TokenKind::PowEq => Some(AssignOp::PowAssign),
        TokenKind::ModEq => Some(AssignOp::ModAssign),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    /// expr = "var" IDENT "=" expr
    ///      | IDENT assign-op expr
    ///      | comp (("and" | "or") comp)*
    ///
    /// An identifier followed by anything other than an assignment
    /// operator is rolled back one token and re-parsed as an ordinary
    /// comparison chain.
    pub(crate) fn expr(&mut self) -> ParseResult<Node> {
        if self.current().is_keyword(Keyword::Var) {
            self.advance();
            let (name, name_span) = self.expect_identifier()?;
            self.expect(TokenKind::Eq, "Expected '='")?;
            let value = self.expr()?;
            return Ok(Node::VarAssign(VarAssignNode {
                name,
                op: AssignOp::Assign,
                value: Box::new(value),
                define: true,
                span: name_span,
            }));
        }

        if matches!(self.current().kind, TokenKind::Identifier(_)) {
            let (name, name_span) = self.expect_identifier()?;
            match assign_op_of(&self.current().kind) {
                Some(op) => {
                    self.advance();
                    let value = self.expr()?;
                    return Ok(Node::VarAssign(VarAssignNode {
                        name,
                        op,
                        value: Box::new(value),
                        define: false,
                        span: name_span,
                    }));
                }
                None => self.reverse(1),
            }
        }

        self.bin_op(Self::comp, &[BinOp::And, BinOp::Or], Self::comp)
    }

    /// comp = "not" comp | arith ((EE|NE|LT|GT|LTE|GTE) arith)*
    pub(crate) fn comp(&mut self) -> ParseResult<Node> {
        if self.current().is_keyword(Keyword::Not) {
            let start = self.current().span;
            self.advance();
            let operand = self.comp()?;
            let span = start.to(operand.span());
            return Ok(Node::Unary(UnaryNode {
                op: UnOp::Not,
                operand: Box::new(operand),
                span,
            }));
        }
        self.bin_op(
            Self::arith,
            &[
                BinOp::Ee,
                BinOp::Ne,
                BinOp::Lt,
                BinOp::Gt,
                BinOp::Lte,
                BinOp::Gte,
            ],
            Self::arith,
        )
    }

    /// arith = term ((PLUS|MINUS) term)*
    pub(crate) fn arith(&mut self) -> ParseResult<Node> {
        self.bin_op(Self::term, &[BinOp::Add, BinOp::Sub], Self::term)
    }

    /// term = factor ((MUL|DIV|MOD) factor)*
    pub(crate) fn term(&mut self) -> ParseResult<Node> {
        self.bin_op(
            Self::factor,
            &[BinOp::Mul, BinOp::Div, BinOp::Mod],
            Self::factor,
        )
    }

    /// factor = (PLUS|MINUS) factor | power
    pub(crate) fn factor(&mut self) -> ParseResult<Node> {
        let op = match self.current().kind {
            TokenKind::Plus => Some(UnOp::Pos),
            TokenKind::Minus => Some(UnOp::Neg),
            _ => None,
        };
        if let Some(op) = op {
            let start = self.current().span;
            self.advance();
            let operand = self.factor()?;
            let span = start.to(operand.span());
            return Ok(Node::Unary(UnaryNode {
                op,
                operand: Box::new(operand),
                span,
            }));
        }
        self.power()
    }

    /// power = call (POW factor)*
    ///
    /// The right operand recurses into `factor`, so `**` is
    /// right-associative and binds tighter than unary minus on its right.
    pub(crate) fn power(&mut self) -> ParseResult<Node> {
        self.bin_op(Self::call, &[BinOp::Pow], Self::factor)
    }

    /// call = atom (LPAREN (expr ("," expr)*)? RPAREN)?
    pub(crate) fn call(&mut self) -> ParseResult<Node> {
        let callee = self.atom()?;

        if self.current().kind != TokenKind::LParen {
            return Ok(callee);
        }
        self.advance();

        let mut args = Vec::new();
        if self.current().kind == TokenKind::RParen {
            self.advance();
        } else {
            args.push(self.expr()?);
            while self.current().kind == TokenKind::Comma {
                self.advance();
                args.push(self.expr()?);
            }
            self.expect(TokenKind::RParen, "Expected ',' or ')'")?;
        }

        let span = match args.last() {
            Some(last) => callee.span().to(last.span()),
            None => callee.span(),
        };
        Ok(Node::Call(CallNode {
            callee: Box::new(callee),
            args,
            span,
        }))
    }

    /// atom = INT | FLOAT | STRING | IDENT | LPAREN expr RPAREN
    ///      | list-expr | if-expr | for-expr | while-expr | func-expr
    pub(crate) fn atom(&mut self) -> ParseResult<Node> {
        let token = self.current().clone();
        let span = token.span;
        match token.kind {
            TokenKind::Int(value) => {
                self.advance();
                Ok(Node::Number(NumberNode {
                    value: NumberLit::Int(value),
                    span,
                }))
            }
            TokenKind::Float(value) => {
                self.advance();
                Ok(Node::Number(NumberNode {
                    value: NumberLit::Float(value),
                    span,
                }))
            }
            TokenKind::Str(text) => {
                self.advance();
                Ok(Node::Str(StrNode {
                    value: Rc::from(text),
                    span,
                }))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Node::VarAccess(VarAccessNode {
                    name: Rc::from(name),
                    span,
                }))
            }
            TokenKind::LBracket => self.list_expr(),
            TokenKind::LParen => {
                self.advance();
                let inner = self.expr()?;
                self.expect(TokenKind::RParen, "Expected ')'")?;
                Ok(inner)
            }
            TokenKind::Keyword(Keyword::If) => self.if_expr(),
            TokenKind::Keyword(Keyword::For) => self.for_expr(),
            TokenKind::Keyword(Keyword::While) => self.while_expr(),
            TokenKind::Keyword(Keyword::Func) => self.func_expr(),
            _ => Err(self.syntax_error("Expected int, float, identifier or '('")),
        }
    }

    /// list-expr = LBRACKET (expr (COMMA expr)*)? RBRACKET
    fn list_expr(&mut self) -> ParseResult<Node> {
        let start = self.current().span.start;
        self.expect(TokenKind::LBracket, "Expected '['")?;

        let mut elements = Vec::new();
        if self.current().kind == TokenKind::RBracket {
            // fall through to the closing bracket below
        } else {
            elements.push(self.expr()?);
            while self.current().kind == TokenKind::Comma {
                self.advance();
                elements.push(self.expr()?);
            }
        }

        let end = self.current().span.end;
        self.expect(TokenKind::RBracket, "Expected ',' or ']'")?;
        Ok(Node::List(ListNode {
            elements,
            span: Span::new(start, end),
        }))
    }

    /// if-expr = "if" expr "{" statements "}"
    ///           ("elif" expr "{" statements "}")*
    ///           ("else" "{" statements "}")?
    ///
    /// Because `}` injects a NEWLINE, `elif` and `else` sit behind a
    /// statement separator; the separator is skipped speculatively and
    /// restored when no continuation follows.
    fn if_expr(&mut self) -> ParseResult<Node> {
        let start = self.current().span;
        if !self.current().is_keyword(Keyword::If) {
            return Err(self.syntax_error("Expected 'if'"));
        }
        self.advance();

        let mut cases = Vec::new();
        let cond = self.expr()?;
        let body = self.braced_statements()?;
        cases.push((cond, body));

        loop {
            let continued = self.try_parse(|p| {
                p.skip_newlines();
                if p.current().is_keyword(Keyword::Elif) {
                    p.advance();
                    Ok(())
                } else {
                    Err(p.syntax_error("Expected 'elif'"))
                }
            });
            if continued.is_none() {
                break;
            }
            let cond = self.expr()?;
            let body = self.braced_statements()?;
            cases.push((cond, body));
        }

        let has_else = self
            .try_parse(|p| {
                p.skip_newlines();
                if p.current().is_keyword(Keyword::Else) {
                    p.advance();
                    Ok(())
                } else {
                    Err(p.syntax_error("Expected 'else'"))
                }
            })
            .is_some();
        let else_body = if has_else {
            Some(Box::new(self.braced_statements()?))
        } else {
            None
        };

        let end = match &else_body {
            Some(body) => body.span(),
            None => cases[cases.len() - 1].1.span(),
        };
        Ok(Node::If(IfNode {
            cases,
            else_body,
            span: start.to(end),
        }))
    }

    /// for-expr = "for" IDENT "=" expr "to" expr ("step" expr)?
    ///            "{" statements "}"
    fn for_expr(&mut self) -> ParseResult<Node> {
        let start = self.current().span;
        if !self.current().is_keyword(Keyword::For) {
            return Err(self.syntax_error("Expected 'for'"));
        }
        self.advance();

        let (var, var_span) = self.expect_identifier()?;
        self.expect(TokenKind::Eq, "Expected '='")?;
        let start_value = self.expr()?;

        if !self.current().is_keyword(Keyword::To) {
            return Err(self.syntax_error("Expected 'to'"));
        }
        self.advance();
        let end_value = self.expr()?;

        let step = if self.current().is_keyword(Keyword::Step) {
            self.advance();
            Some(Box::new(self.expr()?))
        } else {
            None
        };

        let body = self.braced_statements()?;
        let span = start.to(body.span());
        Ok(Node::For(ForNode {
            var,
            var_span,
            start: Box::new(start_value),
            end: Box::new(end_value),
            step,
            body: Box::new(body),
            span,
        }))
    }

    /// while-expr = "while" expr "{" statements "}"
    fn while_expr(&mut self) -> ParseResult<Node> {
        let start = self.current().span;
        if !self.current().is_keyword(Keyword::While) {
            return Err(self.syntax_error("Expected 'while'"));
        }
        self.advance();

        let cond = self.expr()?;
        let body = self.braced_statements()?;
        let span = start.to(body.span());
        Ok(Node::While(WhileNode {
            cond: Box::new(cond),
            body: Box::new(body),
            span,
        }))
    }

    /// func-expr = "func" IDENT? LPAREN (IDENT (COMMA IDENT)*)? RPAREN ARROW
    ///             (expr | "{" statements "}")
    fn func_expr(&mut self) -> ParseResult<Node> {
        let start = self.current().span;
        if !self.current().is_keyword(Keyword::Func) {
            return Err(self.syntax_error("Expected 'func'"));
        }
        self.advance();

        let name = if matches!(self.current().kind, TokenKind::Identifier(_)) {
            Some(self.expect_identifier()?.0)
        } else {
            None
        };

        self.expect(TokenKind::LParen, "Expected '('")?;
        let mut params: Vec<Rc<str>> = Vec::new();
        if matches!(self.current().kind, TokenKind::Identifier(_)) {
            params.push(self.expect_identifier()?.0);
            while self.current().kind == TokenKind::Comma {
                self.advance();
                params.push(self.expect_identifier()?.0);
            }
        }
        self.expect(TokenKind::RParen, "Expected ')'")?;
        self.expect(TokenKind::Arrow, "Expected '->'")?;

        let (body, auto_return) = if self.current().kind == TokenKind::LBrace {
            (self.braced_statements()?, false)
        } else {
            let body = self
                .expr()
                .map_err(|_| self.syntax_error("Expected int, float, identifier, '(' or '{'"))?;
            (body, true)
        };

        let span = start.to(body.span());
        Ok(Node::Func(FuncNode {
            name,
            params: params.into(),
            body: Rc::new(body),
            auto_return,
            span,
        }))
    }

    /// "{" statements "}"
    pub(crate) fn braced_statements(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::LBrace, "Expected '{'")?;
        let body = self.statements()?;
        self.expect(TokenKind::RBrace, "Expected '}'")?;
        Ok(body)
    }

    /// Left-associative binary operator chain: `first (op rest)*`.
    ///
    /// `ops` is the set of operators accepted at this precedence level.
    pub(crate) fn bin_op(
        &mut self,
        first: fn(&mut Self) -> ParseResult<Node>,
        ops: &[BinOp],
        rest: fn(&mut Self) -> ParseResult<Node>,
    ) -> ParseResult<Node> {
        let mut left = first(self)?;
        while let Some(op) = binop_of(&self.current().kind).filter(|op| ops.contains(op)) {
            self.advance();
            let right = rest(self)?;
            let span = left.span().to(right.span());
            left = Node::Binary(BinaryNode {
                left: Box::new(left),
                op,
                right: Box::new(right),
                span,
            });
        }
        Ok(left)
    }
}
