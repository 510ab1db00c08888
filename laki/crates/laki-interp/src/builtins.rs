//! Built-in bindings: the seeded constants and the native functions
//! `print`, `input`, `int`, and `str`.
//!
//! Each builtin has a fixed parameter list and follows the same exact
//! arity contract as user functions. A builtin call runs in a fresh
//! context with an empty, parentless environment populated with the
//! named arguments.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use laki_util::{LakiError, Span};

use crate::context::Context;
use crate::interp::{Flow, RunResult};
use crate::symbol_table::SymbolTable;
use crate::value::{Number, Value, ValueKind};

/// The closed set of built-in functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinKind {
    Print,
    Input,
    Int,
    Str,
}

impl BuiltinKind {
    pub fn name(self) -> &'static str {
        match self {
            BuiltinKind::Print => "print",
            BuiltinKind::Input => "input",
            BuiltinKind::Int => "int",
            BuiltinKind::Str => "str",
        }
    }

    /// The builtin's fixed parameter names.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            BuiltinKind::Print => &["value"],
            BuiltinKind::Input => &[],
            BuiltinKind::Int => &["value"],
            BuiltinKind::Str => &["value"],
        }
    }
}

/// A freshly populated root environment: the constant Numbers and the
/// builtin functions. Each program run gets its own.
pub fn global_symbols() -> Rc<RefCell<SymbolTable>> {
    let mut table = SymbolTable::new();

    table.set("null".into(), Value::int(0));
    table.set("true".into(), Value::int(1));
    table.set("false".into(), Value::int(0));
    table.set("PI".into(), Value::float(std::f64::consts::PI));
    table.set("E".into(), Value::float(std::f64::consts::E));

    for kind in [
        BuiltinKind::Print,
        BuiltinKind::Input,
        BuiltinKind::Int,
        BuiltinKind::Str,
    ] {
        table.set(kind.name().into(), Value::builtin(kind));
    }

    Rc::new(RefCell::new(table))
}

/// Calls a builtin.
pub(crate) fn exec_builtin(
    kind: BuiltinKind,
    call_span: Span,
    args: Vec<Value>,
    caller: &Context,
) -> RunResult {
    let params = kind.params();

    // builtin frames have no parent context, so arity errors carry a
    // bare traceback header
    if args.len() > params.len() {
        return Err(Box::new(LakiError::runtime(
            call_span,
            caller.file.to_string(),
            format!(
                "{} more arguments passed into {}",
                args.len() - params.len(),
                kind.name()
            ),
            Vec::new(),
        )));
    }
    if args.len() < params.len() {
        return Err(Box::new(LakiError::runtime(
            call_span,
            caller.file.to_string(),
            format!(
                "{} fewer arguments passed into {}",
                params.len() - args.len(),
                kind.name()
            ),
            Vec::new(),
        )));
    }

    let ctx = Rc::new(Context {
        name: Rc::from(kind.name()),
        file: caller.file.clone(),
        parent: None,
        parent_entry: Some(call_span.start),
        symbols: Rc::new(RefCell::new(SymbolTable::new())),
    });
    for (param, arg) in params.iter().zip(args) {
        ctx.symbols.borrow_mut().set(Rc::from(*param), arg);
    }

    let result = match kind {
        BuiltinKind::Print => {
            let value = named_arg(&ctx, "value");
            println!("{}", value.payload_string());
            Value::null()
        }
        BuiltinKind::Input => {
            let mut line = String::new();
            let _ = io::stdin().read_line(&mut line);
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Value::string(Rc::from(line))
        }
        BuiltinKind::Int => {
            let value = named_arg(&ctx, "value");
            match &value.kind {
                ValueKind::Number(Number::Int(v)) => Value::int(*v),
                ValueKind::Number(Number::Float(v)) => Value::int(*v as i64),
                ValueKind::Str(s) => match s.trim().parse::<i64>() {
                    Ok(v) => Value::int(v),
                    Err(_) => return Err(int_conversion_error(&ctx, &value, call_span)),
                },
                _ => return Err(int_conversion_error(&ctx, &value, call_span)),
            }
        }
        BuiltinKind::Str => {
            let value = named_arg(&ctx, "value");
            Value::string(Rc::from(value.payload_string()))
        }
    };
    Ok(Flow::Value(result))
}

fn named_arg(ctx: &Context, name: &str) -> Value {
    ctx.symbols.borrow().get(name).unwrap_or_else(Value::null)
}

fn int_conversion_error(ctx: &Context, value: &Value, call_span: Span) -> Box<LakiError> {
    ctx.error(
        value.span.unwrap_or(call_span),
        format!("{value} cannot be converted to an int"),
    )
}
