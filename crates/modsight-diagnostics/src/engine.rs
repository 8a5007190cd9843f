//! The diagnostics pass.

use modsight_graph::{GraphError, GraphOutcome, GraphRequest, SkipReason};
use modsight_shadow::{ShadowFile, ShadowStager};
use modsight_syntax::{ParseOutcome, parse};
use tracing::{debug, info_span, warn};

use crate::analysis::analyze;
use crate::assemble::{DiagnosticsMap, assemble};
use crate::context::PassContext;
use crate::error::DiagnosticsError;
use crate::snapshot::ModuleSnapshot;

/// Whether the semantic step ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticStatus {
    /// Requirements were compared with build-graph facts.
    Analyzed,
    /// The comparison did not run.
    Skipped(SkipReason),
}

/// Result of a completed pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsReport {
    diagnostics: DiagnosticsMap,
    semantic_status: SemanticStatus,
}

impl DiagnosticsReport {
    /// Diagnostics per file; files without findings are absent.
    #[must_use]
    pub const fn diagnostics(&self) -> &DiagnosticsMap {
        &self.diagnostics
    }

    /// Tells a clean result apart from one where analysis was skipped.
    #[must_use]
    pub const fn semantic_status(&self) -> SemanticStatus {
        self.semantic_status
    }

    /// Consumes the report, returning the diagnostics map.
    #[must_use]
    pub fn into_diagnostics(self) -> DiagnosticsMap {
        self.diagnostics
    }
}

/// Computes diagnostics for the module file in `snapshot`.
///
/// The real module file is never written. When shadow staging is enabled,
/// the content is copied into a temporary directory that the build-graph
/// query may use, and the real file is re-checked against its fingerprint
/// once the query finishes.
///
/// # Errors
///
/// Returns [`DiagnosticsError::Cancelled`] when the context's token fires
/// before the pass completes, and [`DiagnosticsError::ReadModuleFile`] when
/// the snapshot's content cannot be read. No partial result is returned in
/// either case.
pub fn compute_diagnostics(
    context: &PassContext,
    snapshot: &dyn ModuleSnapshot,
) -> Result<DiagnosticsReport, DiagnosticsError> {
    let span = info_span!(
        "compute_diagnostics",
        uri = snapshot.uri().as_str(),
        version = snapshot.version()
    );
    let _entered = span.enter();

    context.ensure_active()?;
    let content = snapshot
        .read_content()
        .map_err(|err| DiagnosticsError::read_module_file(snapshot.path(), err))?;

    context.ensure_active()?;
    let shadow = stage_shadow(context, snapshot, &content);

    let parsed = parse(snapshot.uri().clone(), &content);
    debug!(
        directives = parsed.module().directives().len(),
        findings = parsed.findings().len(),
        "parsed module file"
    );

    let resolved = resolve_graph(context, snapshot, &parsed, &content, shadow.as_ref());
    if let Some(staged) = shadow {
        release_shadow(staged);
    }
    let graph = resolved?;

    let semantic = analyze(parsed.module(), &graph, &context.options().analysis());
    let semantic_status = match graph.skip_reason() {
        Some(reason) => SemanticStatus::Skipped(reason),
        None => SemanticStatus::Analyzed,
    };
    debug!(
        semantic = semantic.len(),
        status = ?semantic_status,
        "analysed requirements"
    );

    let diagnostics = assemble(
        parsed.module(),
        parsed.findings(),
        &semantic,
        &context.options().tidy_source,
    );
    Ok(DiagnosticsReport {
        diagnostics,
        semantic_status,
    })
}

fn stage_shadow(
    context: &PassContext,
    snapshot: &dyn ModuleSnapshot,
    content: &str,
) -> Option<ShadowFile> {
    let options = context.options();
    if !options.shadow_enabled {
        return None;
    }
    let stager = options
        .scratch_dir
        .as_ref()
        .map_or_else(ShadowStager::new, |dir| {
            ShadowStager::new().with_scratch_dir(dir.as_std_path())
        });
    match stager.stage(snapshot.path().as_std_path(), content) {
        Ok(shadow) => Some(shadow),
        Err(err) => {
            warn!(error = %err, "shadow staging failed; continuing without a shadow");
            None
        }
    }
}

fn resolve_graph(
    context: &PassContext,
    snapshot: &dyn ModuleSnapshot,
    parsed: &ParseOutcome,
    content: &str,
    shadow: Option<&ShadowFile>,
) -> Result<GraphOutcome, DiagnosticsError> {
    if parsed.has_errors() {
        debug!("skipping semantic analysis: module file has syntax errors");
        return Ok(GraphOutcome::Skipped(SkipReason::ParseErrors));
    }

    context.ensure_active()?;
    let base = GraphRequest::new(snapshot.uri(), content);
    let request = match shadow {
        Some(staged) => base.with_shadow_dir(staged.dir()),
        None => base,
    };
    let result = snapshot.build_graph(&request, context.cancel_token());
    context.ensure_active()?;

    match result {
        Ok(facts) => Ok(GraphOutcome::from(facts)),
        Err(GraphError::Cancelled) => Err(DiagnosticsError::Cancelled),
        Err(err) => {
            warn!(error = %err, "build graph unavailable; skipping semantic analysis");
            Ok(GraphOutcome::Skipped(SkipReason::Unavailable))
        }
    }
}

fn release_shadow(shadow: ShadowFile) {
    if let Err(err) = shadow.verify_original() {
        warn!(error = %err, "real module file changed during the pass");
    }
    if let Err(err) = shadow.close() {
        warn!(error = %err, "failed to remove shadow directory");
    }
}
