//! Consistency checks between declared requirements and build-graph facts.

use std::collections::HashSet;

use modsight_config::IndirectCheck;
use modsight_graph::{DependencyUse, GraphOutcome};
use modsight_syntax::{ModuleFile, Requirement, Span};

/// Settings for [`analyze`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Which indirect-marker mismatches are reported.
    pub indirect_check: IndirectCheck,
}

/// Category of a semantic finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticKind {
    /// The build does not need the requirement.
    Unused,
    /// Marked `// indirect` but imported directly.
    StaleIndirectMarker,
    /// Reached only transitively but not marked `// indirect`.
    MissingIndirectMarker,
    /// The same module path is required again.
    DuplicateRequirement,
}

/// A mismatch between a requirement and the build graph.
///
/// Semantic findings are always warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticFinding {
    kind: SemanticKind,
    message: String,
    span: Span,
}

impl SemanticFinding {
    fn for_requirement(kind: SemanticKind, requirement: &Requirement) -> Self {
        let path = &requirement.path;
        let message = match kind {
            SemanticKind::Unused => format!("{path} is not used in this module."),
            SemanticKind::StaleIndirectMarker => {
                format!("{path} should not be an indirect dependency.")
            }
            SemanticKind::MissingIndirectMarker => {
                format!("{path} should be an indirect dependency.")
            }
            SemanticKind::DuplicateRequirement => format!("{path} is required more than once."),
        };
        Self {
            kind,
            message,
            span: requirement.span,
        }
    }

    /// Category of the finding.
    #[must_use]
    pub const fn kind(&self) -> SemanticKind {
        self.kind
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Span of the offending requirement.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }
}

/// Compares each requirement in `module` with the build-graph facts.
///
/// Returns nothing when the outcome is [`GraphOutcome::Skipped`], and
/// nothing for requirements without a fact.
#[must_use]
pub fn analyze(
    module: &ModuleFile,
    outcome: &GraphOutcome,
    options: &AnalysisOptions,
) -> Vec<SemanticFinding> {
    let Some(facts) = outcome.facts() else {
        return Vec::new();
    };

    let mut findings = Vec::new();
    let mut seen = HashSet::new();
    for requirement in module.requirements() {
        if !seen.insert(requirement.path.as_str()) {
            findings.push(SemanticFinding::for_requirement(
                SemanticKind::DuplicateRequirement,
                requirement,
            ));
        }
        let Some(usage) = facts.use_of(&requirement.path) else {
            continue;
        };
        if let Some(kind) = mismatch(requirement.indirect, usage, options.indirect_check) {
            findings.push(SemanticFinding::for_requirement(kind, requirement));
        }
    }
    findings
}

const fn mismatch(
    marked_indirect: bool,
    usage: DependencyUse,
    policy: IndirectCheck,
) -> Option<SemanticKind> {
    match usage {
        DependencyUse::Unused => Some(SemanticKind::Unused),
        DependencyUse::Direct if marked_indirect && policy.reports_stale_marker() => {
            Some(SemanticKind::StaleIndirectMarker)
        }
        DependencyUse::Transitive if !marked_indirect && policy.reports_missing_marker() => {
            Some(SemanticKind::MissingIndirectMarker)
        }
        DependencyUse::Direct | DependencyUse::Transitive => None,
    }
}
