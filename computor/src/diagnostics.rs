//! User-facing computor diagnostics.
//!
//! Renders [libcomputor diagnostics][libcomputor::diagnostics] as annotated source snippets.

use libcomputor::diagnostics::{AssociatedDiagnostic, Diagnostic, DiagnosticKind};

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};

/// Pads the equation so that a diagnostic spanning its end still has a column to point at.
pub fn sanitize_source_for_diagnostics(source: &str) -> String {
    format!("{} ", source)
}

pub fn emit_computor_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    color: bool,
) -> String {
    let mut emitted = Vec::with_capacity(diagnostics.len());

    for diagnostic in diagnostics {
        let main_annotation_type = convert_diagnostic_kind(diagnostic.kind);
        let label = diagnostic.msg.clone().unwrap_or_default();

        let annotations = vec![SourceAnnotation {
            label: &label,
            annotation_type: main_annotation_type,
            range: diagnostic.span.into(),
        }];

        let footer = diagnostic
            .unspanned_associated_diagnostics
            .iter()
            .map(convert_associated_diagnostic)
            .collect();

        let snippet = Snippet {
            title: Some(Annotation {
                label: Some(&diagnostic.title),
                id: diagnostic.code,
                annotation_type: main_annotation_type,
            }),
            footer,
            slices: vec![Slice {
                source,
                line_start: 1,
                origin: None,
                fold: true,
                annotations,
            }],
            opt: FormatOptions {
                color,
                ..Default::default()
            },
        };
        emitted.push(format!("{}\n", DisplayList::from(snippet)));
    }

    emitted.join("\n")
}

fn convert_associated_diagnostic(diagnostic: &AssociatedDiagnostic) -> Annotation {
    Annotation {
        label: Some(&diagnostic.msg),
        id: None,
        annotation_type: convert_diagnostic_kind(diagnostic.kind),
    }
}

fn convert_diagnostic_kind(diagnostic_kind: DiagnosticKind) -> AnnotationType {
    match diagnostic_kind {
        DiagnosticKind::Error => AnnotationType::Error,
        DiagnosticKind::Note => AnnotationType::Note,
        DiagnosticKind::Help => AnnotationType::Help,
    }
}
