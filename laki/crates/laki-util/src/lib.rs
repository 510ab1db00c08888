//! laki-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the foundation types shared by every phase of the
//! LakiScript pipeline:
//!
//! 1. SOURCE POSITIONS AND SPANS
//!    Every token, AST node, value, and error carries a span so that any
//!    failure can be reported against the exact source characters that
//!    caused it. Positions track byte index, line, and column; spans are a
//!    (start, end) pair where `end` points one past the last covered
//!    character.
//!
//! 2. ERROR REPORTING
//!    A single error type covers the whole pipeline: illegal characters and
//!    missing expected characters from the lexer, invalid syntax from the
//!    parser, and runtime errors from the evaluator. Runtime errors carry a
//!    traceback captured from the evaluation context chain at the moment the
//!    error is constructed, so the error stays printable after the frames
//!    that produced it are gone.
//!
//! The crate deliberately has no knowledge of tokens, AST nodes, or values;
//! those layers depend on this one, never the other way around.

pub mod error;
pub mod fmt;
pub mod span;

pub use error::{ErrorKind, LakiError, TraceFrame};
pub use span::{Position, Span};
