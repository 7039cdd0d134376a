//! Diagnostics for computor equations.
//!
//! A [`Diagnostic`] is a spanned, coded report about an equation. Every diagnostic code has a long
//! form explanation registered through a [`DiagnosticRegistry`], which is what `--explain` prints.

use crate::common::Span;
use crate::parser::ParseErrors;

use std::collections::HashMap;

/// A diagnostic record with a stable code and a detailed explanation.
pub trait DiagnosticRecord {
    /// Code of the diagnostic, like "P0001".
    const CODE: &'static str;
    /// Long form explanation of the diagnostic.
    const EXPLANATION: &'static str;
}

/// A collection of [`DiagnosticRecord`]s produced by one part of libcomputor.
pub trait DiagnosticRegistry {
    /// Returns `(code, explanation)` pairs of every diagnostic in the registry.
    fn codes_with_explanations() -> Vec<(&'static str, &'static str)>;
}

/// The kind of a computor diagnostic.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum DiagnosticKind {
    /// An error diagnostic. Emitted for equations that cannot be reduced.
    Error,
    /// A note diagnostic is a generic annotation with no specific connotation like `error`. It is
    /// useful as an associated diagnostic, for example in expanding on a primary error.
    Note,
    /// A help diagnostic instructs the user how their equation can be changed to be accepted.
    Help,
}

/// A note or help message attached to a primary `Diagnostic`, rendered in its footer.
#[derive(Clone, Debug)]
pub struct AssociatedDiagnostic {
    pub kind: DiagnosticKind,
    pub msg: String,
}

/// A diagnostic for an equation.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub title: String,
    pub code: Option<&'static str>,
    pub msg: Option<String>,
    pub unspanned_associated_diagnostics: Vec<AssociatedDiagnostic>,
}

impl Diagnostic {
    /// Creates an error diagnostic at a span.
    pub(crate) fn span_err<S, M, N>(span: S, title: M, code: &'static str, msg: N) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
        N: Into<Option<String>>,
    {
        Diagnostic {
            kind: DiagnosticKind::Error,
            span: span.into(),
            title: title.into(),
            code: Some(code),
            msg: msg.into(),
            unspanned_associated_diagnostics: Vec::with_capacity(2),
        }
    }

    /// Adds a note to the diagnostic.
    pub(crate) fn with_note<M>(mut self, note: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.unspanned_associated_diagnostics
            .push(AssociatedDiagnostic {
                kind: DiagnosticKind::Note,
                msg: note.into(),
            });
        self
    }

    /// Adds a help message to the diagnostic.
    pub(crate) fn with_help<M>(mut self, help: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.unspanned_associated_diagnostics
            .push(AssociatedDiagnostic {
                kind: DiagnosticKind::Help,
                msg: help.into(),
            });
        self
    }

    /// Returns all diagnostic codes known to libcomputor, mapped to their explanations.
    pub fn all_codes_with_explanations() -> HashMap<&'static str, &'static str> {
        ParseErrors::codes_with_explanations().into_iter().collect()
    }
}
