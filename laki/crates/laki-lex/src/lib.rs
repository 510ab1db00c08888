//! laki-lex - Lexical Analyzer (Lexer/Tokenizer)
//!
//! ============================================================================
//! LEXICAL ANALYSIS
//! ============================================================================
//!
//! The lexer is the first phase of the pipeline. It transforms a stream of
//! characters into a stream of tokens:
//!
//! ```text
//! Source:  "var a = 1 + 2"
//!
//! Tokens:  [KEYWORD: var] [IDENTIFIER: a] [EQ] [INT: 1] [PLUS] [INT: 2] [EOF]
//!          (spaces skipped)
//! ```
//!
//! TOKEN CATEGORIES:
//! -----------------
//!
//! 1. LITERALS
//!    - INT: `42` (digits only)
//!    - FLOAT: `3.14`, `12.` (digits with a single dot)
//!    - STRING: `'hello'` (single-quoted, `\n` and `\t` escapes)
//!
//! 2. IDENTIFIERS AND KEYWORDS
//!    An identifier starts with a letter and continues with letters,
//!    digits, or underscores. Lexemes in the keyword set (`var`, `and`,
//!    `or`, `not`, `if`, `elif`, `else`, `for`, `to`, `step`, `while`,
//!    `func`, `return`, `continue`, `break`) become KEYWORD tokens.
//!
//! 3. OPERATORS
//!    Single and multi-character: `+ - * / % **`, the compound-assign
//!    family `+= -= *= /= %= **=`, comparisons `== != < > <= >=`, plain
//!    `=`, and the arrow `->`. A `!` must be followed by `=`; a bare `!`
//!    is an expected-character error.
//!
//! 4. DELIMITERS
//!    `( ) { } [ ] ,` — and `}` additionally emits a NEWLINE token so the
//!    statement list it closes is always cleanly terminated.
//!
//! 5. SEPARATORS
//!    `\n` and `;` both produce NEWLINE. `//` starts a comment that runs
//!    up to (but not including) the end of the line.
//!
//! EOF is always the final token. Any other character is an
//! illegal-character error covering exactly that character.

pub mod cursor;
mod edge_cases;
mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Keyword, Token, TokenKind};

use laki_util::LakiError;

/// Result type for lexing operations.
pub type LexResult<T> = std::result::Result<T, Box<LakiError>>;
