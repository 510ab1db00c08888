//! laki-interp - AST Evaluator
//!
//! ============================================================================
//! EVALUATION MODEL
//! ============================================================================
//!
//! The evaluator walks the AST recursively. Every visit produces a
//! [`Flow`] wrapped in a `Result`:
//!
//! ```text
//! Flow::Value(v)   normal completion with a value
//! Flow::Return(v)  a pending `return`, consumed by the enclosing call
//! Flow::Continue   a pending `continue`, consumed by the enclosing loop
//! Flow::Break      a pending `break`, consumed by the enclosing loop
//! Err(e)           a runtime error, propagated to the host
//! ```
//!
//! Anything that is not `Flow::Value` short-circuits the current visit;
//! loops consume `Continue`/`Break` but let errors and returns escape,
//! and function calls consume `Return`. This is how non-local control
//! flow unwinds through nested evaluations without a host exception
//! mechanism.
//!
//! SCOPING:
//! --------
//! Environments ([`SymbolTable`]) form a parent-linked tree; reads walk
//! the chain outward, writes always land in the current frame. Each
//! program run and each function call gets a [`Context`] pairing a frame
//! name (for tracebacks), the file, a call-site position, and its
//! environment. A function value captures its defining context weakly,
//! so a named function stored inside the environment it captured does
//! not keep that environment alive by itself.
//!
//! VALUES:
//! -------
//! Numbers preserve the int/float split of their literals; strings and
//! list storage sit behind `Rc`, so copying a value is cheap and a list
//! copy shares its elements. The operation table in [`value`] defines
//! the permitted operand combinations; everything else is an
//! "Illegal Operation" runtime error spanning both operands.

mod builtins;
mod context;
mod edge_cases;
mod interp;
mod symbol_table;
pub mod value;

pub use builtins::{global_symbols, BuiltinKind};
pub use context::Context;
pub use interp::{Flow, Interpreter, RunResult};
pub use symbol_table::SymbolTable;
pub use value::{Function, Number, Value, ValueKind};
