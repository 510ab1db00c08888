//! laki-par - AST node definitions
//!
//! One [`Node`] variant per syntactic form, each with a struct payload
//! carrying the children and the source span. The AST is immutable after
//! parsing; function bodies sit behind `Rc` so every function value made
//! from the same `func` expression shares one body.

use std::rc::Rc;

use laki_util::Span;

/// A numeric literal, preserving the int/float distinction of its token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberLit {
    Int(i64),
    Float(f64),
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
    Ee,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,
    And,
    Or,
}

/// Unary operators. `Pos` (unary `+`) is the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnOp {
    Pos,
    Neg,
    Not,
}

/// The `=` of an assignment, plain or compound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    PowAssign,
    ModAssign,
}

impl AssignOp {
    /// The binary operator a compound assignment desugars through; `None`
    /// for plain assignment.
    pub fn binop(self) -> Option<BinOp> {
        match self {
            AssignOp::Assign => None,
            AssignOp::AddAssign => Some(BinOp::Add),
            AssignOp::SubAssign => Some(BinOp::Sub),
            AssignOp::MulAssign => Some(BinOp::Mul),
            AssignOp::DivAssign => Some(BinOp::Div),
            AssignOp::PowAssign => Some(BinOp::Pow),
            AssignOp::ModAssign => Some(BinOp::Mod),
        }
    }
}

/// AST node.
#[derive(Clone, Debug)]
pub enum Node {
    /// Numeric literal
    Number(NumberNode),

    /// String literal
    Str(StrNode),

    /// List literal, and also the node for a statement list
    List(ListNode),

    /// Variable read
    VarAccess(VarAccessNode),

    /// Variable definition (`var x = e`) or mutation (`x = e`, `x += e`, ...)
    VarAssign(VarAssignNode),

    /// Binary operation
    Binary(BinaryNode),

    /// Unary operation
    Unary(UnaryNode),

    /// If / elif / else chain
    If(IfNode),

    /// Counted loop
    For(ForNode),

    /// Conditional loop
    While(WhileNode),

    /// Function expression, named or anonymous
    Func(FuncNode),

    /// Call
    Call(CallNode),

    /// Return statement
    Return(ReturnNode),

    /// Continue statement
    Continue(ContinueNode),

    /// Break statement
    Break(BreakNode),
}

impl Node {
    /// The source span this node covers.
    pub fn span(&self) -> Span {
        match self {
            Node::Number(n) => n.span,
            Node::Str(n) => n.span,
            Node::List(n) => n.span,
            Node::VarAccess(n) => n.span,
            Node::VarAssign(n) => n.span,
            Node::Binary(n) => n.span,
            Node::Unary(n) => n.span,
            Node::If(n) => n.span,
            Node::For(n) => n.span,
            Node::While(n) => n.span,
            Node::Func(n) => n.span,
            Node::Call(n) => n.span,
            Node::Return(n) => n.span,
            Node::Continue(n) => n.span,
            Node::Break(n) => n.span,
        }
    }
}

/// Numeric literal
#[derive(Clone, Debug)]
pub struct NumberNode {
    pub value: NumberLit,
    pub span: Span,
}

/// String literal
#[derive(Clone, Debug)]
pub struct StrNode {
    pub value: Rc<str>,
    pub span: Span,
}

/// List literal or statement list
#[derive(Clone, Debug)]
pub struct ListNode {
    pub elements: Vec<Node>,
    pub span: Span,
}

/// Variable read
#[derive(Clone, Debug)]
pub struct VarAccessNode {
    pub name: Rc<str>,
    pub span: Span,
}

/// Variable assignment
///
/// `define` is true for `var x = e` (introduce a binding in the current
/// frame) and false for mutation of an existing binding. The span is the
/// name token's span.
#[derive(Clone, Debug)]
pub struct VarAssignNode {
    pub name: Rc<str>,
    pub op: AssignOp,
    pub value: Box<Node>,
    pub define: bool,
    pub span: Span,
}

/// Binary operation
#[derive(Clone, Debug)]
pub struct BinaryNode {
    pub left: Box<Node>,
    pub op: BinOp,
    pub right: Box<Node>,
    pub span: Span,
}

/// Unary operation
#[derive(Clone, Debug)]
pub struct UnaryNode {
    pub op: UnOp,
    pub operand: Box<Node>,
    pub span: Span,
}

/// If / elif / else chain; `cases` holds (condition, body) in source order
#[derive(Clone, Debug)]
pub struct IfNode {
    pub cases: Vec<(Node, Node)>,
    pub else_body: Option<Box<Node>>,
    pub span: Span,
}

/// `for IDENT = start to end (step s)? { body }`
#[derive(Clone, Debug)]
pub struct ForNode {
    pub var: Rc<str>,
    pub var_span: Span,
    pub start: Box<Node>,
    pub end: Box<Node>,
    pub step: Option<Box<Node>>,
    pub body: Box<Node>,
    pub span: Span,
}

/// `while cond { body }`
#[derive(Clone, Debug)]
pub struct WhileNode {
    pub cond: Box<Node>,
    pub body: Box<Node>,
    pub span: Span,
}

/// Function expression
///
/// `auto_return` is true for the arrow-expression form (`-> expr`), whose
/// body value is the call's result; false for the brace-body form.
#[derive(Clone, Debug)]
pub struct FuncNode {
    pub name: Option<Rc<str>>,
    pub params: Rc<[Rc<str>]>,
    pub body: Rc<Node>,
    pub auto_return: bool,
    pub span: Span,
}

/// Call expression
#[derive(Clone, Debug)]
pub struct CallNode {
    pub callee: Box<Node>,
    pub args: Vec<Node>,
    pub span: Span,
}

/// `return expr?`
#[derive(Clone, Debug)]
pub struct ReturnNode {
    pub value: Option<Box<Node>>,
    pub span: Span,
}

/// `continue`
#[derive(Clone, Debug)]
pub struct ContinueNode {
    pub span: Span,
}

/// `break`
#[derive(Clone, Debug)]
pub struct BreakNode {
    pub span: Span,
}
