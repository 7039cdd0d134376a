//! Definitions of types used in the libcomputor scanner.

use crate::common::Span;
use core::fmt;

/// The type of a [Token][Token].
#[derive(PartialEq, Clone, Debug)]
pub enum TokenType {
    /// A scanned number. Holds the number's source text and its value, which is absent when the
    /// text is not a valid decimal (for example `1.2.3`).
    Number(String, Option<f64>),

    /// + symbol
    Plus,

    /// - symbol
    Minus,

    /// * symbol
    Mult,

    /// ^ symbol
    Exp,

    /// = symbol
    Equal,

    /// The variable marker, `X` or `x`.
    Variable,

    /// An invalid token.
    Invalid(String),

    /// End of file.
    EOF,
}

impl TokenType {
    /// Whether the token is a term sign, `+` or `-`.
    pub fn is_sign(&self) -> bool {
        matches!(self, TokenType::Plus | TokenType::Minus)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenType::*;
        match self {
            Number(text, _) => write!(f, "{}", text),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Mult => write!(f, "*"),
            Exp => write!(f, "^"),
            Equal => write!(f, "="),
            Variable => write!(f, "X"),
            Invalid(s) => write!(f, "Invalid({})", s),
            EOF => write!(f, "end of file"),
        }
    }
}

/// Describes a token in an equation.
#[derive(PartialEq, Clone, Debug)]
pub struct Token {
    /// The type of the token.
    pub ty: TokenType,
    /// The source span of the token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new<Sp>(ty: TokenType, span: Sp) -> Self
    where
        Sp: Into<Span>,
    {
        Self {
            ty,
            span: span.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)
    }
}
