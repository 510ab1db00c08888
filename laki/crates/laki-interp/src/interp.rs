//! The tree-walking evaluator.
//!
//! One `visit` entry point matching on the node variant, with one method
//! per syntactic form. Every visit yields a [`Flow`] (or an error); see
//! the crate docs for the control-flow rules.

use std::rc::Rc;

use laki_par::{
    BinaryNode, CallNode, ForNode, FuncNode, IfNode, ListNode, Node, ReturnNode, UnaryNode,
    VarAccessNode, VarAssignNode, WhileNode,
};
use laki_util::{LakiError, Span};

use crate::builtins::exec_builtin;
use crate::context::Context;
use crate::value::{apply_binop, apply_unop, Function, Number, Value, ValueKind};

/// The outcome of one evaluation step.
#[derive(Debug)]
pub enum Flow {
    /// Normal completion.
    Value(Value),
    /// A pending `return`, consumed by the enclosing function call.
    Return(Value),
    /// A pending `continue`, consumed by the enclosing loop.
    Continue,
    /// A pending `break`, consumed by the enclosing loop.
    Break,
}

/// Result carrier for every evaluation step.
pub type RunResult = std::result::Result<Flow, Box<LakiError>>;

/// Short-circuits the current visit unless the sub-visit completed
/// normally: returns, continues, and breaks bubble up as-is.
macro_rules! propagate {
    ($flow:expr) => {
        match $flow {
            Flow::Value(value) => value,
            other => return Ok(other),
        }
    };
}

/// The AST evaluator.
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates one node in the given context.
    pub fn visit(&self, node: &Node, ctx: &Rc<Context>) -> RunResult {
        match node {
            Node::Number(n) => {
                Ok(Flow::Value(Value::number(n.value.into()).with_span(n.span)))
            }
            Node::Str(n) => Ok(Flow::Value(Value::string(n.value.clone()).with_span(n.span))),
            Node::List(n) => self.visit_list(n, ctx),
            Node::VarAccess(n) => self.visit_var_access(n, ctx),
            Node::VarAssign(n) => self.visit_var_assign(n, ctx),
            Node::Binary(n) => self.visit_binary(n, ctx),
            Node::Unary(n) => self.visit_unary(n, ctx),
            Node::If(n) => self.visit_if(n, ctx),
            Node::For(n) => self.visit_for(n, ctx),
            Node::While(n) => self.visit_while(n, ctx),
            Node::Func(n) => self.visit_func(n, ctx),
            Node::Call(n) => self.visit_call(n, ctx),
            Node::Return(n) => self.visit_return(n, ctx),
            Node::Continue(_) => Ok(Flow::Continue),
            Node::Break(_) => Ok(Flow::Break),
        }
    }

    fn visit_list(&self, node: &ListNode, ctx: &Rc<Context>) -> RunResult {
        let mut elements = Vec::with_capacity(node.elements.len());
        for element in &node.elements {
            elements.push(propagate!(self.visit(element, ctx)?));
        }
        Ok(Flow::Value(Value::list(elements).with_span(node.span)))
    }

    fn visit_var_access(&self, node: &VarAccessNode, ctx: &Rc<Context>) -> RunResult {
        let value = ctx.symbols.borrow().get(&node.name);
        match value {
            Some(value) => Ok(Flow::Value(value.with_span(node.span))),
            None => Err(ctx.error(node.span, format!("{} is undefined", node.name))),
        }
    }

    fn visit_var_assign(&self, node: &VarAssignNode, ctx: &Rc<Context>) -> RunResult {
        if !node.define && ctx.symbols.borrow().get(&node.name).is_none() {
            return Err(ctx.error(node.span, format!("{} is undefined", node.name)));
        }

        let value = match node.op.binop() {
            // compound form: read the current value, then evaluate the
            // right-hand side, then combine
            Some(op) => {
                let current = ctx.symbols.borrow().get(&node.name);
                let Some(current) = current else {
                    return Err(ctx.error(node.span, format!("{} is undefined", node.name)));
                };
                let current = current.with_span(node.span);
                let rhs = propagate!(self.visit(&node.value, ctx)?);
                apply_binop(op, &current, &rhs, ctx)?
            }
            None => propagate!(self.visit(&node.value, ctx)?),
        };

        ctx.symbols.borrow_mut().set(node.name.clone(), value.clone());
        Ok(Flow::Value(value))
    }

    fn visit_binary(&self, node: &BinaryNode, ctx: &Rc<Context>) -> RunResult {
        let left = propagate!(self.visit(&node.left, ctx)?);
        let right = propagate!(self.visit(&node.right, ctx)?);
        let result = apply_binop(node.op, &left, &right, ctx)?;
        Ok(Flow::Value(result.with_span(node.span)))
    }

    fn visit_unary(&self, node: &UnaryNode, ctx: &Rc<Context>) -> RunResult {
        let operand = propagate!(self.visit(&node.operand, ctx)?);
        let result = apply_unop(node.op, &operand, ctx)?;
        Ok(Flow::Value(result.with_span(node.span)))
    }

    fn visit_if(&self, node: &IfNode, ctx: &Rc<Context>) -> RunResult {
        for (cond, body) in &node.cases {
            let cond_value = propagate!(self.visit(cond, ctx)?);
            if cond_value.is_truthy() {
                let body_value = propagate!(self.visit(body, ctx)?);
                return Ok(Flow::Value(body_value));
            }
        }
        if let Some(else_body) = &node.else_body {
            let else_value = propagate!(self.visit(else_body, ctx)?);
            return Ok(Flow::Value(else_value));
        }
        Ok(Flow::Value(Value::null()))
    }

    fn visit_for(&self, node: &ForNode, ctx: &Rc<Context>) -> RunResult {
        let start = propagate!(self.visit(&node.start, ctx)?);
        let start = self.expect_number(&start, ctx)?;
        let end = propagate!(self.visit(&node.end, ctx)?);
        let end = self.expect_number(&end, ctx)?;
        let step = match &node.step {
            Some(step_node) => {
                let step = propagate!(self.visit(step_node, ctx)?);
                self.expect_number(&step, ctx)?
            }
            None => Number::Int(1),
        };

        let ascending = step.as_f64() >= 0.0;
        let mut elements = Vec::new();
        let mut i = start;
        loop {
            let in_range = if ascending { i.le(end) } else { i.ge(end) };
            if !in_range {
                break;
            }
            ctx.symbols
                .borrow_mut()
                .set(node.var.clone(), Value::number(i).with_span(node.var_span));
            i = i.add(step);

            match self.visit(&node.body, ctx)? {
                Flow::Value(value) => elements.push(value),
                Flow::Continue => continue,
                Flow::Break => break,
                ret @ Flow::Return(_) => return Ok(ret),
            }
        }

        Ok(Flow::Value(Value::list(elements).with_span(node.span)))
    }

    fn visit_while(&self, node: &WhileNode, ctx: &Rc<Context>) -> RunResult {
        let mut elements = Vec::new();
        loop {
            let cond = propagate!(self.visit(&node.cond, ctx)?);
            if !cond.is_truthy() {
                break;
            }
            match self.visit(&node.body, ctx)? {
                Flow::Value(value) => elements.push(value),
                Flow::Continue => continue,
                Flow::Break => break,
                ret @ Flow::Return(_) => return Ok(ret),
            }
        }
        Ok(Flow::Value(Value::list(elements).with_span(node.span)))
    }

    fn visit_func(&self, node: &FuncNode, ctx: &Rc<Context>) -> RunResult {
        let function = Function {
            name: node.name.clone(),
            params: node.params.clone(),
            body: node.body.clone(),
            auto_return: node.auto_return,
            captured: Rc::downgrade(ctx),
        };
        let value = Value {
            kind: ValueKind::Function(function),
            span: Some(node.span),
        };
        if let Some(name) = &node.name {
            ctx.symbols.borrow_mut().set(name.clone(), value.clone());
        }
        Ok(Flow::Value(value))
    }

    fn visit_call(&self, node: &CallNode, ctx: &Rc<Context>) -> RunResult {
        let callee = propagate!(self.visit(&node.callee, ctx)?);
        let callee = callee.with_span(node.span);

        let mut args = Vec::with_capacity(node.args.len());
        for arg in &node.args {
            args.push(propagate!(self.visit(arg, ctx)?));
        }

        match &callee.kind {
            ValueKind::Function(function) => self.exec_function(function, node.span, args, ctx),
            ValueKind::Builtin(kind) => exec_builtin(*kind, node.span, args, ctx),
            _ => Err(ctx.error(node.span, "Illegal Operation")),
        }
    }

    fn visit_return(&self, node: &ReturnNode, ctx: &Rc<Context>) -> RunResult {
        let value = match &node.value {
            Some(value_node) => propagate!(self.visit(value_node, ctx)?),
            None => Value::null(),
        };
        Ok(Flow::Return(value))
    }

    /// Calls a function value.
    ///
    /// Opens a child context of the function's captured (defining)
    /// context, checks arity exactly, binds arguments by parameter name,
    /// and evaluates the body. `return` is consumed here; a pending
    /// continue/break escapes to the caller.
    fn exec_function(
        &self,
        function: &Function,
        call_span: Span,
        args: Vec<Value>,
        caller: &Rc<Context>,
    ) -> RunResult {
        let name = function.display_name().to_string();
        let Some(captured) = function.captured.upgrade() else {
            return Err(caller.error(
                call_span,
                format!("The defining scope of {name} has been dropped"),
            ));
        };

        if args.len() > function.params.len() {
            return Err(captured.error(
                call_span,
                format!(
                    "{} more arguments passed into {}",
                    args.len() - function.params.len(),
                    name
                ),
            ));
        }
        if args.len() < function.params.len() {
            return Err(captured.error(
                call_span,
                format!(
                    "{} fewer arguments passed into {}",
                    function.params.len() - args.len(),
                    name
                ),
            ));
        }

        let new_ctx = Context::call(Rc::from(name.as_str()), captured, call_span.start);
        for (param, arg) in function.params.iter().zip(args) {
            new_ctx.symbols.borrow_mut().set(param.clone(), arg);
        }

        let result = match self.visit(&function.body, &new_ctx)? {
            Flow::Value(value) => {
                if function.auto_return {
                    value
                } else {
                    Value::null()
                }
            }
            Flow::Return(value) => value,
            other => return Ok(other),
        };
        Ok(Flow::Value(result))
    }

    fn expect_number(
        &self,
        value: &Value,
        ctx: &Context,
    ) -> Result<Number, Box<LakiError>> {
        value.as_number().ok_or_else(|| {
            ctx.error(value.span.unwrap_or(Span::DUMMY), "Illegal Operation")
        })
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
