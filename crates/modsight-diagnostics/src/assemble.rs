//! Conversion of findings into editor diagnostics grouped by file.

use std::collections::HashMap;

use lsp_types::{Diagnostic, DiagnosticSeverity, Uri};
use modsight_syntax::{LineIndex, ModuleFile, Span, SyntaxFinding};
use tracing::error;

use crate::analysis::SemanticFinding;

/// Diagnostics for each file that has at least one.
pub type DiagnosticsMap = HashMap<Uri, Vec<Diagnostic>>;

/// Source tag attached to syntax diagnostics.
pub const SYNTAX_SOURCE: &str = "syntax";

/// Builds the per-file diagnostics map for one module file.
///
/// Syntax diagnostics precede semantic ones. Within each group diagnostics
/// are ordered by start position, then message. A finding whose span cannot
/// be mapped onto the text is logged and dropped.
#[must_use]
pub fn assemble(
    module: &ModuleFile,
    syntax: &[SyntaxFinding],
    semantic: &[SemanticFinding],
    semantic_source: &str,
) -> DiagnosticsMap {
    let index = LineIndex::new(module.text());
    let convert = |message: &str, span: Span, severity, source: &str| {
        match index.range(module.text(), &span) {
            Ok(range) => Some(Diagnostic {
                range,
                severity: Some(severity),
                source: Some(source.to_owned()),
                message: message.to_owned(),
                ..Diagnostic::default()
            }),
            Err(err) => {
                error!(
                    uri = module.uri().as_str(),
                    finding = message,
                    error = %err,
                    "dropping finding with unmappable span"
                );
                None
            }
        }
    };

    let mut syntax_diagnostics: Vec<_> = syntax
        .iter()
        .filter_map(|finding| {
            convert(
                finding.message(),
                finding.span(),
                DiagnosticSeverity::ERROR,
                SYNTAX_SOURCE,
            )
        })
        .collect();
    let mut semantic_diagnostics: Vec<_> = semantic
        .iter()
        .filter_map(|finding| {
            convert(
                finding.message(),
                finding.span(),
                DiagnosticSeverity::WARNING,
                semantic_source,
            )
        })
        .collect();
    sort_diagnostics(&mut syntax_diagnostics);
    sort_diagnostics(&mut semantic_diagnostics);

    syntax_diagnostics.append(&mut semantic_diagnostics);
    let mut map = DiagnosticsMap::new();
    if !syntax_diagnostics.is_empty() {
        map.insert(module.uri().clone(), syntax_diagnostics);
    }
    map
}

fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by(|left, right| {
        (left.range.start.line, left.range.start.character)
            .cmp(&(right.range.start.line, right.range.start.character))
            .then_with(|| left.message.cmp(&right.message))
    });
}
