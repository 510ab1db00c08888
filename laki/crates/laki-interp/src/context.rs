//! Evaluation contexts.
//!
//! A [`Context`] is one frame of execution: the whole program, a function
//! call, or a builtin call. It pairs a display name (used in tracebacks),
//! the file being executed, a link to the frame that entered it along
//! with the call-site position, and the frame's environment.

use std::cell::RefCell;
use std::rc::Rc;

use laki_util::{LakiError, Position, Span, TraceFrame};

use crate::symbol_table::SymbolTable;

/// One evaluation frame.
pub struct Context {
    /// Display name, e.g. `<program>` or the called function's name.
    pub name: Rc<str>,

    /// File this frame executes in.
    pub file: Rc<str>,

    /// The frame that entered this one. For a function call this is the
    /// function's *defining* context, so tracebacks follow lexical
    /// nesting; `None` for the program frame and for builtin frames.
    pub parent: Option<Rc<Context>>,

    /// Position of the call site that entered this frame.
    pub parent_entry: Option<Position>,

    /// The frame's environment.
    pub symbols: Rc<RefCell<SymbolTable>>,
}

impl Context {
    /// The root frame for one program run.
    pub fn program(file: &str, symbols: Rc<RefCell<SymbolTable>>) -> Rc<Context> {
        Rc::new(Context {
            name: Rc::from("<program>"),
            file: Rc::from(file),
            parent: None,
            parent_entry: None,
            symbols,
        })
    }

    /// A frame entered from `parent_entry`, with a fresh child environment
    /// of `parent`'s.
    pub fn call(
        name: Rc<str>,
        parent: Rc<Context>,
        parent_entry: Position,
    ) -> Rc<Context> {
        let symbols = Rc::new(RefCell::new(SymbolTable::with_parent(
            parent.symbols.clone(),
        )));
        Rc::new(Context {
            name,
            file: parent.file.clone(),
            parent: Some(parent),
            parent_entry: Some(parent_entry),
            symbols,
        })
    }

    /// Walks this frame chain outward and renders it as traceback frames,
    /// outermost first. `error_start` is the position of the failing
    /// expression in the innermost frame.
    pub fn traceback(&self, error_start: Position) -> Vec<TraceFrame> {
        let mut frames = Vec::new();
        let mut pos = error_start;
        let mut ctx: Option<&Context> = Some(self);
        while let Some(current) = ctx {
            frames.push(TraceFrame {
                file: current.file.to_string(),
                line: pos.line,
                name: current.name.to_string(),
            });
            pos = current.parent_entry.unwrap_or(pos);
            ctx = current.parent.as_deref();
        }
        frames.reverse();
        frames
    }

    /// A runtime error raised in this frame.
    pub fn error(&self, span: Span, detail: impl Into<String>) -> Box<LakiError> {
        Box::new(LakiError::runtime(
            span,
            self.file.to_string(),
            detail,
            self.traceback(span.start),
        ))
    }
}
