//! The value model and its operation table.
//!
//! Five value kinds: numbers (int or float), strings, lists, function
//! values, and builtin functions. String text and list storage sit behind
//! `Rc`, so cloning a value is cheap and list copies share their element
//! storage.
//!
//! Permitted operand combinations:
//!
//! | operation | operands |
//! |---|---|
//! | `+ - * / ** %` and comparisons | Number ⊕ Number |
//! | `and` `or` `not` | Number only |
//! | `*` repetition | Number·Str, Str·Number, List·Number |
//! | `+` concatenation | Str+Str, List+List |
//! | `==` `!=` | Str/Str and List/List as well as Number/Number |
//!
//! Anything else is an "Illegal Operation" runtime error spanning both
//! operands. Comparison results are int Numbers 0 or 1; `and`/`or` pick
//! one of their operands by truthiness; division or modulus by zero (and
//! a zero base raised to a negative power) report "Divisor cannot be 0"
//! on the right operand's span.

use std::fmt;
use std::rc::{Rc, Weak};

use laki_par::{BinOp, Node, NumberLit, UnOp};
use laki_util::fmt::float_repr;
use laki_util::{LakiError, Span};

use crate::builtins::BuiltinKind;
use crate::context::Context;

/// A numeric payload, preserving the int/float split.
///
/// Integer arithmetic that would overflow promotes to float instead of
/// wrapping; mixed operands promote to float; `/` always yields float.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    pub fn is_truthy(self) -> bool {
        !self.is_zero()
    }

    pub fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 + b as f64)),
            _ => Number::Float(self.as_f64() + other.as_f64()),
        }
    }

    pub fn sub(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_sub(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 - b as f64)),
            _ => Number::Float(self.as_f64() - other.as_f64()),
        }
    }

    pub fn mul(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_mul(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 * b as f64)),
            _ => Number::Float(self.as_f64() * other.as_f64()),
        }
    }

    /// True division: the result is always a float.
    pub fn div(self, other: Number) -> Number {
        Number::Float(self.as_f64() / other.as_f64())
    }

    /// Floor modulus: the result takes the divisor's sign.
    pub fn rem_floor(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => match a.checked_rem(b) {
                Some(r) if r != 0 && (r < 0) != (b < 0) => Number::Int(r + b),
                Some(r) => Number::Int(r),
                // i64::MIN % -1: the remainder is exactly 0
                None => Number::Int(0),
            },
            _ => {
                let (a, b) = (self.as_f64(), other.as_f64());
                let r = a % b;
                if r != 0.0 && (r < 0.0) != (b < 0.0) {
                    Number::Float(r + b)
                } else {
                    Number::Float(r)
                }
            }
        }
    }

    pub fn pow(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) if b >= 0 => u32::try_from(b)
                .ok()
                .and_then(|exp| a.checked_pow(exp))
                .map(Number::Int)
                .unwrap_or_else(|| Number::Float((a as f64).powf(b as f64))),
            _ => Number::Float(self.as_f64().powf(other.as_f64())),
        }
    }

    pub fn equals(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }

    pub fn lt(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a < b,
            _ => self.as_f64() < other.as_f64(),
        }
    }

    pub fn gt(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a > b,
            _ => self.as_f64() > other.as_f64(),
        }
    }

    pub fn le(self, other: Number) -> bool {
        !self.gt(other)
    }

    pub fn ge(self, other: Number) -> bool {
        !self.lt(other)
    }
}

impl From<NumberLit> for Number {
    fn from(lit: NumberLit) -> Self {
        match lit {
            NumberLit::Int(v) => Number::Int(v),
            NumberLit::Float(v) => Number::Float(v),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{}", float_repr(*v)),
        }
    }
}

/// A function value: shared body plus a weak link to its defining
/// context. Calls open a child scope of that context (lexical scoping);
/// holding the link weakly keeps a named function from pinning the very
/// environment it is stored in.
#[derive(Clone, Debug)]
pub struct Function {
    pub name: Option<Rc<str>>,
    pub params: Rc<[Rc<str>]>,
    pub body: Rc<Node>,
    pub auto_return: bool,
    pub captured: Weak<Context>,
}

impl Function {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

/// The payload of a [`Value`].
#[derive(Clone, Debug)]
pub enum ValueKind {
    Number(Number),
    Str(Rc<str>),
    List(Rc<Vec<Value>>),
    Function(Function),
    Builtin(BuiltinKind),
}

/// A runtime value: payload plus the span it was last produced at, used
/// for error reporting. Values are re-spanned when read from a variable
/// or used as a callee, so errors point at the use site.
#[derive(Clone, Debug)]
pub struct Value {
    pub kind: ValueKind,
    pub span: Option<Span>,
}

impl Value {
    pub fn int(value: i64) -> Value {
        Value::number(Number::Int(value))
    }

    pub fn float(value: f64) -> Value {
        Value::number(Number::Float(value))
    }

    pub fn number(value: Number) -> Value {
        Value {
            kind: ValueKind::Number(value),
            span: None,
        }
    }

    /// The null Number (int 0).
    pub fn null() -> Value {
        Value::int(0)
    }

    pub fn string(text: Rc<str>) -> Value {
        Value {
            kind: ValueKind::Str(text),
            span: None,
        }
    }

    pub fn list(elements: Vec<Value>) -> Value {
        Value {
            kind: ValueKind::List(Rc::new(elements)),
            span: None,
        }
    }

    pub fn builtin(kind: BuiltinKind) -> Value {
        Value {
            kind: ValueKind::Builtin(kind),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Value {
        self.span = Some(span);
        self
    }

    pub fn as_number(&self) -> Option<Number> {
        match &self.kind {
            ValueKind::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Truthiness: numbers by non-zero payload, strings and lists by
    /// non-emptiness, functions always.
    pub fn is_truthy(&self) -> bool {
        match &self.kind {
            ValueKind::Number(n) => n.is_truthy(),
            ValueKind::Str(s) => !s.is_empty(),
            ValueKind::List(elements) => !elements.is_empty(),
            ValueKind::Function(_) | ValueKind::Builtin(_) => true,
        }
    }

    /// The payload form used by `print` and `str`: like `Display`, but
    /// strings come out raw instead of quoted.
    pub fn payload_string(&self) -> String {
        match &self.kind {
            ValueKind::Str(s) => s.to_string(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Number(n) => write!(f, "{n}"),
            ValueKind::Str(s) => write!(f, "'{s}'"),
            ValueKind::List(elements) => {
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                Ok(())
            }
            ValueKind::Function(func) => write!(f, "<function {}>", func.display_name()),
            ValueKind::Builtin(kind) => write!(f, "<built-in function {}>", kind.name()),
        }
    }
}

/// Structural equality as used by `==` and `!=`: numbers by numeric
/// value, strings by text, lists element-wise, functions by shared body.
pub fn structural_eq(lhs: &Value, rhs: &Value) -> bool {
    match (&lhs.kind, &rhs.kind) {
        (ValueKind::Number(a), ValueKind::Number(b)) => a.equals(*b),
        (ValueKind::Str(a), ValueKind::Str(b)) => a == b,
        (ValueKind::List(a), ValueKind::List(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| structural_eq(x, y))
        }
        (ValueKind::Function(a), ValueKind::Function(b)) => Rc::ptr_eq(&a.body, &b.body),
        (ValueKind::Builtin(a), ValueKind::Builtin(b)) => a == b,
        _ => false,
    }
}

fn pair_span(lhs: &Value, rhs: &Value) -> Span {
    let start = lhs.span.unwrap_or(Span::DUMMY).start;
    let end = rhs.span.unwrap_or(Span::DUMMY).end;
    Span::new(start, end)
}

fn div_zero(rhs: &Value, ctx: &Context) -> Box<LakiError> {
    ctx.error(rhs.span.unwrap_or(Span::DUMMY), "Divisor cannot be 0")
}

fn bool_int(value: bool) -> Value {
    Value::int(value as i64)
}

fn repeat_str(text: &str, count: Number) -> Option<Rc<str>> {
    match count {
        Number::Int(n) if n <= 0 => Some(Rc::from("")),
        Number::Int(n) => Some(Rc::from(text.repeat(n as usize))),
        Number::Float(_) => None,
    }
}

fn repeat_list(elements: &[Value], count: Number) -> Option<Vec<Value>> {
    match count {
        Number::Int(n) if n <= 0 => Some(Vec::new()),
        Number::Int(n) => {
            let mut out = Vec::with_capacity(elements.len() * n as usize);
            for _ in 0..n {
                out.extend(elements.iter().cloned());
            }
            Some(out)
        }
        Number::Float(_) => None,
    }
}

/// Applies a binary operator to two values.
///
/// `ctx` is the live evaluation context; it supplies the file name and
/// traceback for any error.
pub fn apply_binop(
    op: BinOp,
    lhs: &Value,
    rhs: &Value,
    ctx: &Context,
) -> Result<Value, Box<LakiError>> {
    let illegal = || ctx.error(pair_span(lhs, rhs), "Illegal Operation");

    let value = match (op, &lhs.kind, &rhs.kind) {
        (BinOp::Add, ValueKind::Number(a), ValueKind::Number(b)) => Value::number(a.add(*b)),
        (BinOp::Add, ValueKind::Str(a), ValueKind::Str(b)) => {
            let mut text = String::with_capacity(a.len() + b.len());
            text.push_str(a);
            text.push_str(b);
            Value::string(Rc::from(text))
        }
        (BinOp::Add, ValueKind::List(a), ValueKind::List(b)) => {
            Value::list(a.iter().chain(b.iter()).cloned().collect())
        }

        (BinOp::Sub, ValueKind::Number(a), ValueKind::Number(b)) => Value::number(a.sub(*b)),

        (BinOp::Mul, ValueKind::Number(a), ValueKind::Number(b)) => Value::number(a.mul(*b)),
        (BinOp::Mul, ValueKind::Number(n), ValueKind::Str(s))
        | (BinOp::Mul, ValueKind::Str(s), ValueKind::Number(n)) => {
            Value::string(repeat_str(s, *n).ok_or_else(illegal)?)
        }
        (BinOp::Mul, ValueKind::List(elements), ValueKind::Number(n)) => {
            Value::list(repeat_list(elements, *n).ok_or_else(illegal)?)
        }

        (BinOp::Div, ValueKind::Number(a), ValueKind::Number(b)) => {
            if b.is_zero() {
                return Err(div_zero(rhs, ctx));
            }
            Value::number(a.div(*b))
        }

        (BinOp::Pow, ValueKind::Number(a), ValueKind::Number(b)) => {
            if a.is_zero() && b.as_f64() < 0.0 {
                return Err(div_zero(rhs, ctx));
            }
            Value::number(a.pow(*b))
        }

        (BinOp::Mod, ValueKind::Number(a), ValueKind::Number(b)) => {
            if b.is_zero() {
                return Err(div_zero(rhs, ctx));
            }
            Value::number(a.rem_floor(*b))
        }

        (BinOp::Ee, ValueKind::Number(_), ValueKind::Number(_))
        | (BinOp::Ee, ValueKind::Str(_), ValueKind::Str(_))
        | (BinOp::Ee, ValueKind::List(_), ValueKind::List(_)) => {
            bool_int(structural_eq(lhs, rhs))
        }
        (BinOp::Ne, ValueKind::Number(_), ValueKind::Number(_))
        | (BinOp::Ne, ValueKind::Str(_), ValueKind::Str(_))
        | (BinOp::Ne, ValueKind::List(_), ValueKind::List(_)) => {
            bool_int(!structural_eq(lhs, rhs))
        }

        (BinOp::Lt, ValueKind::Number(a), ValueKind::Number(b)) => bool_int(a.lt(*b)),
        (BinOp::Gt, ValueKind::Number(a), ValueKind::Number(b)) => bool_int(a.gt(*b)),
        (BinOp::Lte, ValueKind::Number(a), ValueKind::Number(b)) => bool_int(a.le(*b)),
        (BinOp::Gte, ValueKind::Number(a), ValueKind::Number(b)) => bool_int(a.ge(*b)),

        (BinOp::And, ValueKind::Number(a), ValueKind::Number(b)) => {
            Value::number(if a.is_truthy() { *b } else { *a })
        }
        (BinOp::Or, ValueKind::Number(a), ValueKind::Number(b)) => {
            Value::number(if a.is_truthy() { *a } else { *b })
        }

        _ => return Err(illegal()),
    };
    Ok(value)
}

/// Applies a unary operator to a value.
///
/// Unary minus is multiplication by `Number(-1)`, so it also applies to
/// strings and lists (yielding the empty string/list); unary plus is the
/// identity; `not` is defined on numbers only.
pub fn apply_unop(op: UnOp, operand: &Value, ctx: &Context) -> Result<Value, Box<LakiError>> {
    match op {
        UnOp::Pos => Ok(operand.clone()),
        UnOp::Neg => {
            let mut minus_one = Value::int(-1);
            minus_one.span = operand.span;
            apply_binop(BinOp::Mul, operand, &minus_one, ctx)
        }
        UnOp::Not => match &operand.kind {
            ValueKind::Number(n) => Ok(bool_int(!n.is_truthy())),
            _ => Err(ctx.error(
                operand.span.unwrap_or(Span::DUMMY),
                "Illegal Operation",
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol_table::SymbolTable;
    use std::cell::RefCell;

    fn ctx() -> Rc<Context> {
        Context::program("<test>", Rc::new(RefCell::new(SymbolTable::new())))
    }

    fn num(value: &Value) -> Number {
        value.as_number().expect("expected a number")
    }

    fn binop(op: BinOp, lhs: Value, rhs: Value) -> Result<Value, Box<LakiError>> {
        apply_binop(op, &lhs, &rhs, &ctx())
    }

    #[test]
    fn test_int_arithmetic_stays_int() {
        let sum = binop(BinOp::Add, Value::int(2), Value::int(3)).unwrap();
        assert!(matches!(num(&sum), Number::Int(5)));
        let prod = binop(BinOp::Mul, Value::int(4), Value::int(5)).unwrap();
        assert!(matches!(num(&prod), Number::Int(20)));
        let pow = binop(BinOp::Pow, Value::int(2), Value::int(10)).unwrap();
        assert!(matches!(num(&pow), Number::Int(1024)));
    }

    #[test]
    fn test_mixed_arithmetic_promotes_to_float() {
        let sum = binop(BinOp::Add, Value::int(1), Value::float(0.5)).unwrap();
        assert!(matches!(num(&sum), Number::Float(v) if v == 1.5));
    }

    #[test]
    fn test_division_is_true_division() {
        let q = binop(BinOp::Div, Value::int(7), Value::int(2)).unwrap();
        assert!(matches!(num(&q), Number::Float(v) if v == 3.5));
        let q = binop(BinOp::Div, Value::int(4), Value::int(2)).unwrap();
        assert!(matches!(num(&q), Number::Float(v) if v == 2.0));
    }

    #[test]
    fn test_division_by_zero() {
        let err = binop(BinOp::Div, Value::int(1), Value::int(0)).unwrap_err();
        assert_eq!(err.detail, "Divisor cannot be 0");
        let err = binop(BinOp::Mod, Value::int(1), Value::float(0.0)).unwrap_err();
        assert_eq!(err.detail, "Divisor cannot be 0");
    }

    #[test]
    fn test_modulus_takes_divisor_sign() {
        let r = binop(BinOp::Mod, Value::int(-7), Value::int(3)).unwrap();
        assert!(matches!(num(&r), Number::Int(2)));
        let r = binop(BinOp::Mod, Value::int(7), Value::int(-3)).unwrap();
        assert!(matches!(num(&r), Number::Int(-2)));
        let r = binop(BinOp::Mod, Value::float(-5.5), Value::int(2)).unwrap();
        assert!(matches!(num(&r), Number::Float(v) if v == 0.5));
    }

    #[test]
    fn test_negative_exponent_yields_float() {
        let r = binop(BinOp::Pow, Value::int(2), Value::int(-1)).unwrap();
        assert!(matches!(num(&r), Number::Float(v) if v == 0.5));
    }

    #[test]
    fn test_zero_base_negative_exponent() {
        let err = binop(BinOp::Pow, Value::int(0), Value::int(-1)).unwrap_err();
        assert_eq!(err.detail, "Divisor cannot be 0");
    }

    #[test]
    fn test_int_overflow_promotes() {
        let r = binop(BinOp::Add, Value::int(i64::MAX), Value::int(1)).unwrap();
        assert!(matches!(num(&r), Number::Float(_)));
    }

    #[test]
    fn test_comparisons_are_zero_or_one() {
        let t = binop(BinOp::Lt, Value::int(1), Value::int(2)).unwrap();
        assert!(matches!(num(&t), Number::Int(1)));
        let f = binop(BinOp::Gte, Value::int(1), Value::int(2)).unwrap();
        assert!(matches!(num(&f), Number::Int(0)));
        let eq = binop(BinOp::Ee, Value::int(1), Value::float(1.0)).unwrap();
        assert!(matches!(num(&eq), Number::Int(1)));
    }

    #[test]
    fn test_logic_returns_an_operand() {
        let r = binop(BinOp::And, Value::int(3), Value::int(5)).unwrap();
        assert!(matches!(num(&r), Number::Int(5)));
        let r = binop(BinOp::And, Value::int(0), Value::int(5)).unwrap();
        assert!(matches!(num(&r), Number::Int(0)));
        let r = binop(BinOp::Or, Value::int(3), Value::int(5)).unwrap();
        assert!(matches!(num(&r), Number::Int(3)));
        let r = binop(BinOp::Or, Value::int(0), Value::int(5)).unwrap();
        assert!(matches!(num(&r), Number::Int(5)));
    }

    #[test]
    fn test_string_concat_and_compare() {
        let s = binop(
            BinOp::Add,
            Value::string("ab".into()),
            Value::string("cd".into()),
        )
        .unwrap();
        assert_eq!(s.payload_string(), "abcd");
        let eq = binop(
            BinOp::Ee,
            Value::string("ab".into()),
            Value::string("ab".into()),
        )
        .unwrap();
        assert!(matches!(num(&eq), Number::Int(1)));
    }

    #[test]
    fn test_string_repetition() {
        let s = binop(BinOp::Mul, Value::string("ab".into()), Value::int(3)).unwrap();
        assert_eq!(s.payload_string(), "ababab");
        let s = binop(BinOp::Mul, Value::int(2), Value::string("xy".into())).unwrap();
        assert_eq!(s.payload_string(), "xyxy");
        let s = binop(BinOp::Mul, Value::string("ab".into()), Value::int(0)).unwrap();
        assert_eq!(s.payload_string(), "");
    }

    #[test]
    fn test_string_repetition_by_float_is_illegal() {
        let err = binop(BinOp::Mul, Value::string("ab".into()), Value::float(1.5)).unwrap_err();
        assert_eq!(err.detail, "Illegal Operation");
    }

    #[test]
    fn test_list_concat_and_repeat() {
        let a = Value::list(vec![Value::int(1), Value::int(2)]);
        let b = Value::list(vec![Value::int(3)]);
        let joined = binop(BinOp::Add, a.clone(), b).unwrap();
        assert_eq!(joined.to_string(), "1, 2, 3");
        let tripled = binop(BinOp::Mul, a, Value::int(2)).unwrap();
        assert_eq!(tripled.to_string(), "1, 2, 1, 2");
    }

    #[test]
    fn test_list_equality_is_structural() {
        let a = Value::list(vec![Value::int(1), Value::string("x".into())]);
        let b = Value::list(vec![Value::int(1), Value::string("x".into())]);
        let eq = binop(BinOp::Ee, a.clone(), b).unwrap();
        assert!(matches!(num(&eq), Number::Int(1)));
        let c = Value::list(vec![Value::int(1)]);
        let ne = binop(BinOp::Ne, a, c).unwrap();
        assert!(matches!(num(&ne), Number::Int(1)));
    }

    #[test]
    fn test_concat_empty_list_round_trip() {
        let a = Value::list(vec![Value::int(1), Value::int(2), Value::int(3)]);
        let joined = binop(BinOp::Add, a.clone(), Value::list(Vec::new())).unwrap();
        let eq = binop(BinOp::Ee, joined, a).unwrap();
        assert!(matches!(num(&eq), Number::Int(1)));
    }

    #[test]
    fn test_illegal_combinations() {
        for (lhs, rhs) in [
            (Value::int(1), Value::string("a".into())),
            (Value::string("a".into()), Value::list(Vec::new())),
            (Value::int(1), Value::list(Vec::new())),
        ] {
            let err = binop(BinOp::Add, lhs, rhs).unwrap_err();
            assert_eq!(err.detail, "Illegal Operation");
        }
        let err = binop(BinOp::And, Value::string("a".into()), Value::int(1)).unwrap_err();
        assert_eq!(err.detail, "Illegal Operation");
    }

    #[test]
    fn test_unary_minus_on_number_and_string() {
        let c = ctx();
        let n = apply_unop(UnOp::Neg, &Value::int(5), &c).unwrap();
        assert!(matches!(num(&n), Number::Int(-5)));
        let s = apply_unop(UnOp::Neg, &Value::string("ab".into()), &c).unwrap();
        assert_eq!(s.payload_string(), "");
    }

    #[test]
    fn test_unary_not() {
        let c = ctx();
        let r = apply_unop(UnOp::Not, &Value::int(0), &c).unwrap();
        assert!(matches!(num(&r), Number::Int(1)));
        let r = apply_unop(UnOp::Not, &Value::float(2.5), &c).unwrap();
        assert!(matches!(num(&r), Number::Int(0)));
        let err = apply_unop(UnOp::Not, &Value::string("x".into()), &c).unwrap_err();
        assert_eq!(err.detail, "Illegal Operation");
    }

    #[test]
    fn test_copy_compares_equal() {
        let original = Value::list(vec![Value::int(1), Value::string("s".into())]);
        let copy = original.clone();
        assert!(structural_eq(&original, &copy));
        // the copy shares element storage
        if let (ValueKind::List(a), ValueKind::List(b)) = (&original.kind, &copy.kind) {
            assert!(Rc::ptr_eq(a, b));
        } else {
            panic!("expected lists");
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::int(0).is_truthy());
        assert!(Value::int(-1).is_truthy());
        assert!(!Value::float(0.0).is_truthy());
        assert!(!Value::string("".into()).is_truthy());
        assert!(Value::string("x".into()).is_truthy());
        assert!(!Value::list(Vec::new()).is_truthy());
        assert!(Value::list(vec![Value::int(0)]).is_truthy());
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::int(3).to_string(), "3");
        assert_eq!(Value::float(3.0).to_string(), "3.0");
        assert_eq!(Value::string("hi".into()).to_string(), "'hi'");
        assert_eq!(Value::string("hi".into()).payload_string(), "hi");
        let list = Value::list(vec![Value::int(1), Value::string("a".into())]);
        assert_eq!(list.to_string(), "1, 'a'");
        assert_eq!(
            Value::builtin(BuiltinKind::Print).to_string(),
            "<built-in function print>"
        );
    }
}
