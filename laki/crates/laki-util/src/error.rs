//! Error types for the LakiScript pipeline.
//!
//! All phases report failures through a single [`LakiError`] type: the
//! lexer produces illegal-character and expected-character errors, the
//! parser invalid-syntax errors, and the evaluator runtime errors.
//!
//! Every error renders as
//!
//! ```text
//! <Kind>: <detail>
//! File <file>, line <line>
//! ```
//!
//! and runtime errors are prefixed with a traceback:
//!
//! ```text
//! Traceback (most recent call last):
//! File <file>, line <line>, in <frame name>
//! ...
//! ```
//!
//! The traceback is captured eagerly when the error is constructed, by
//! walking the evaluation context chain from the failing frame outward, so
//! the error owns everything it needs to print itself.

use std::fmt;

use thiserror::Error;

use crate::span::Span;

/// Error categories, displayed as the first word of the rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A character the lexer cannot start any token with
    #[error("Illegal Character")]
    IllegalChar,

    /// A multi-character token missing its mandatory second character
    #[error("Expected Character Error")]
    ExpectedChar,

    /// A token sequence no grammar rule accepts
    #[error("Invalid Syntax")]
    InvalidSyntax,

    /// A failure during evaluation
    #[error("Runtime Error")]
    Runtime,
}

/// One frame of a runtime traceback, innermost frame last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceFrame {
    /// File the frame executes in
    pub file: String,
    /// Line of the active statement (0-based, printed 1-based)
    pub line: u32,
    /// Display name of the frame's context
    pub name: String,
}

/// An error from any phase of the pipeline.
#[derive(Clone, Debug)]
pub struct LakiError {
    /// Category of the error
    pub kind: ErrorKind,
    /// Human-readable description
    pub detail: String,
    /// Source range the error points at
    pub span: Span,
    /// File the error occurred in
    pub file: String,
    /// Call frames for runtime errors, outermost first; empty otherwise
    pub trace: Vec<TraceFrame>,
}

impl LakiError {
    /// An illegal-character error from the lexer.
    pub fn illegal_char(span: Span, file: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalChar, span, file, detail)
    }

    /// An expected-character error from the lexer.
    pub fn expected_char(span: Span, file: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExpectedChar, span, file, detail)
    }

    /// An invalid-syntax error from the parser.
    pub fn invalid_syntax(span: Span, file: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSyntax, span, file, detail)
    }

    /// A runtime error with a captured traceback.
    pub fn runtime(
        span: Span,
        file: impl Into<String>,
        detail: impl Into<String>,
        trace: Vec<TraceFrame>,
    ) -> Self {
        let mut err = Self::new(ErrorKind::Runtime, span, file, detail);
        err.trace = trace;
        err
    }

    fn new(kind: ErrorKind, span: Span, file: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            span,
            file: file.into(),
            trace: Vec::new(),
        }
    }

    /// True for evaluator errors (the kind that carries a traceback).
    pub fn is_runtime(&self) -> bool {
        self.kind == ErrorKind::Runtime
    }
}

impl fmt::Display for LakiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_runtime() {
            writeln!(f, "Traceback (most recent call last):")?;
            for frame in &self.trace {
                writeln!(
                    f,
                    "File {}, line {}, in {}",
                    frame.file,
                    frame.line + 1,
                    frame.name
                )?;
            }
        }
        writeln!(f, "{}: {}", self.kind, self.detail)?;
        write!(f, "File {}, line {}", self.file, self.span.end.line + 1)
    }
}

impl std::error::Error for LakiError {}
