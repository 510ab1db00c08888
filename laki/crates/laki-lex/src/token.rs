//! Token model and keyword table.
//!
//! [`TokenKind`] is the closed set of token categories the lexer can emit;
//! literal-carrying kinds own their decoded payload. [`Keyword`] is the
//! closed keyword set. Every [`Token`] pairs a kind with the span of the
//! source characters it covers.

use std::fmt;

use laki_util::fmt::float_repr;
use laki_util::Span;

/// Reserved words of the language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    Var,
    And,
    Or,
    Not,
    If,
    Elif,
    Else,
    For,
    To,
    Step,
    While,
    Func,
    Return,
    Continue,
    Break,
}

impl Keyword {
    /// Looks up an identifier lexeme in the keyword table.
    pub fn lookup(lexeme: &str) -> Option<Keyword> {
        match lexeme {
            "var" => Some(Keyword::Var),
            "and" => Some(Keyword::And),
            "or" => Some(Keyword::Or),
            "not" => Some(Keyword::Not),
            "if" => Some(Keyword::If),
            "elif" => Some(Keyword::Elif),
            "else" => Some(Keyword::Else),
            "for" => Some(Keyword::For),
            "to" => Some(Keyword::To),
            "step" => Some(Keyword::Step),
            "while" => Some(Keyword::While),
            "func" => Some(Keyword::Func),
            "return" => Some(Keyword::Return),
            "continue" => Some(Keyword::Continue),
            "break" => Some(Keyword::Break),
            _ => None,
        }
    }

    /// The keyword's lexeme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Var => "var",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::Not => "not",
            Keyword::If => "if",
            Keyword::Elif => "elif",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::To => "to",
            Keyword::Step => "step",
            Keyword::While => "while",
            Keyword::Func => "func",
            Keyword::Return => "return",
            Keyword::Continue => "continue",
            Keyword::Break => "break",
        }
    }
}

/// The closed set of token kinds.
///
/// Literal kinds carry their decoded value: INT the parsed integer, FLOAT
/// the parsed float, STRING the text with escapes resolved, IDENTIFIER its
/// name, and KEYWORD the matched [`Keyword`].
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals and names
    Int(i64),
    Float(f64),
    Str(String),
    Identifier(String),
    Keyword(Keyword),

    // Separators
    Newline,
    Eof,

    // Arithmetic operators
    Plus,
    Minus,
    Mul,
    Div,
    Pow,
    Mod,

    // Assignment operators
    Eq,
    PlusEq,
    MinusEq,
    MulEq,
    DivEq,
    PowEq,
    ModEq,

    // Comparison operators
    Ee,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Arrow,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(v) => write!(f, "INT: {v}"),
            TokenKind::Float(v) => write!(f, "FLOAT: {}", float_repr(*v)),
            TokenKind::Str(s) => write!(f, "STRING: {s}"),
            TokenKind::Identifier(name) => write!(f, "IDENTIFIER: {name}"),
            TokenKind::Keyword(kw) => write!(f, "KEYWORD: {}", kw.as_str()),
            TokenKind::Newline => write!(f, "NEWLINE"),
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Plus => write!(f, "PLUS"),
            TokenKind::Minus => write!(f, "MINUS"),
            TokenKind::Mul => write!(f, "MUL"),
            TokenKind::Div => write!(f, "DIV"),
            TokenKind::Pow => write!(f, "POW"),
            TokenKind::Mod => write!(f, "MOD"),
            TokenKind::Eq => write!(f, "EQ"),
            TokenKind::PlusEq => write!(f, "PLUSEQ"),
            TokenKind::MinusEq => write!(f, "MINUSEQ"),
            TokenKind::MulEq => write!(f, "MULEQ"),
            TokenKind::DivEq => write!(f, "DIVEQ"),
            TokenKind::PowEq => write!(f, "POWEQ"),
            TokenKind::ModEq => write!(f, "MODEQ"),
            TokenKind::Ee => write!(f, "EE"),
            TokenKind::Ne => write!(f, "NE"),
            TokenKind::Lt => write!(f, "LT"),
            TokenKind::Gt => write!(f, "GT"),
            TokenKind::Lte => write!(f, "LTE"),
            TokenKind::Gte => write!(f, "GTE"),
            TokenKind::LParen => write!(f, "LPAREN"),
            TokenKind::RParen => write!(f, "RPAREN"),
            TokenKind::LBrace => write!(f, "LBRACE"),
            TokenKind::RBrace => write!(f, "RBRACE"),
            TokenKind::LBracket => write!(f, "LBRACKET"),
            TokenKind::RBracket => write!(f, "RBRACKET"),
            TokenKind::Comma => write!(f, "COMMA"),
            TokenKind::Arrow => write!(f, "ARROW"),
        }
    }
}

/// A token: kind plus the span of the source characters it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind == TokenKind::Keyword(kw)
    }

    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::Newline
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
