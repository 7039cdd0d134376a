//! Errors produced by the equation parser.

use crate::common::Span;
use crate::diagnostics::{Diagnostic, DiagnosticRecord, DiagnosticRegistry};

use thiserror::Error;

macro_rules! define_errors {
    ($($(#[doc = $doc:expr])+ $code:ident: $error:ident $gen_macro:tt)*) => {$(
        $(#[doc = $doc])+
        pub(crate) struct $error;

        impl DiagnosticRecord for $error {
            const CODE: &'static str = stringify!($code);
            const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
        })*

        /// Diagnostic errors produced by the parser.
        pub struct ParseErrors;

        impl DiagnosticRegistry for ParseErrors {
            #[allow(clippy::vec_init_then_push)]
            fn codes_with_explanations() -> Vec<(&'static str, &'static str)> {
                let mut vec = Vec::new();
                $(vec.push(($error::CODE, $error::EXPLANATION));)*
                vec
            }
        }

        $(
            macro_rules! $error $gen_macro
        )*
    };
}

define_errors! {
    ///An equation must contain exactly one `=` separating its left and right sides.
    ///
    ///This error fires when the `=` is missing, as in
    ///
    ///```text
    ///5 * X^0 + 4 * X^1
    ///```
    ///
    ///or when there is more than one, as in
    ///
    ///```text
    ///X^2 = 4 = 2 * X
    ///        ^- second `=`
    ///```
    ///
    ///An expression with no right side can be written as an equation with `= 0`.
    P0001: InvalidFormat {
        ($span:expr, $equals:expr) => {{
            let diag = Diagnostic::span_err(
                $span,
                "Invalid equation format",
                InvalidFormat::CODE,
                match $equals {
                    0 => "no `=` in this equation".to_string(),
                    _ => "unexpected second `=`".to_string(),
                },
            )
            .with_note("an equation must contain exactly one '='");
            match $equals {
                0 => diag.with_help("if this expression should equal zero, append \"= 0\""),
                _ => diag,
            }
        }}
    }

    ///Each side of an equation is a sum of terms. A term has the form
    ///
    ///```text
    ///[sign] [coefficient] [*] [X[^power]]
    ///```
    ///
    ///where at least one of the coefficient and the variable is present. The variable may be
    ///written `X` or `x`, and its power must be a non-negative integer. The following are all
    ///valid terms:
    ///
    ///```text
    ///5 * X^0    4*X    -X^2    .5x    3
    ///```
    ///
    ///This error fires on terms that do not have that form, for example
    ///
    ///```text
    ///2 * y = 0      - `y` is not the variable
    ///X^2.5 = 1      - powers must be integers
    ///5 * = 2        - `*` must be followed by the variable
    ///X^2 =          - the right side has no terms
    ///```
    P0002: InvalidTerm {
        ($span:expr, $reason:expr) => {
            Diagnostic::span_err(
                $span,
                "Invalid term",
                InvalidTerm::CODE,
                $reason.to_string(),
            )
            .with_note("terms have the form `[sign] [coefficient] [*] [X[^power]]`")
        }
    }
}

/// An error produced while parsing an equation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The equation does not have exactly one `=`.
    #[error("Invalid equation format: must contain exactly one '='.")]
    InvalidFormat {
        /// Number of `=` found.
        equals: usize,
        /// Span of the whole equation when `=` is missing, otherwise of the second `=`.
        span: Span,
    },

    /// A term could not be read as a coefficient and power.
    #[error("Invalid term{}: {reason}.", quoted(.term))]
    InvalidTerm {
        /// Source text of the term.
        term: String,
        /// Why the term is invalid.
        reason: String,
        /// Span of the term.
        span: Span,
    },
}

fn quoted(term: &str) -> String {
    if term.is_empty() {
        String::new()
    } else {
        format!(" \"{}\"", term)
    }
}

impl ParseError {
    /// The source span the error refers to.
    pub fn span(&self) -> Span {
        match self {
            Self::InvalidFormat { span, .. } | Self::InvalidTerm { span, .. } => *span,
        }
    }

    /// Lowers the error to a coded [Diagnostic].
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::InvalidFormat { equals, span } => InvalidFormat!(*span, *equals),
            Self::InvalidTerm { reason, span, .. } => InvalidTerm!(*span, reason),
        }
    }
}
