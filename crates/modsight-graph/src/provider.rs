//! Provider abstraction for build-graph facts.
//!
//! The engine depends only on [`BuildGraphProvider`]. Real implementations
//! wrap a toolchain query; [`FixedBuildGraph`] answers from a predetermined
//! fact set and is what tests and offline callers use.

use std::path::Path;

use lsp_types::Uri;
use tokio_util::sync::CancellationToken;

use crate::error::GraphError;
use crate::facts::BuildGraphFacts;

/// What a provider is asked to describe.
#[derive(Debug, Clone, Copy)]
pub struct GraphRequest<'a> {
    /// Identity of the module file.
    pub module_uri: &'a Uri,
    /// Module file content as held by the editor.
    pub content: &'a str,
    /// Directory containing a staged shadow copy, when one exists.
    ///
    /// Providers that run external tools must point them here rather than
    /// at the real project directory.
    pub shadow_dir: Option<&'a Path>,
}

impl<'a> GraphRequest<'a> {
    /// Creates a request without a shadow copy.
    #[must_use]
    pub const fn new(module_uri: &'a Uri, content: &'a str) -> Self {
        Self {
            module_uri,
            content,
            shadow_dir: None,
        }
    }

    /// Attaches the shadow directory.
    #[must_use]
    pub const fn with_shadow_dir(mut self, shadow_dir: &'a Path) -> Self {
        self.shadow_dir = Some(shadow_dir);
        self
    }
}

/// Source of build-graph facts.
///
/// Implementations must honour `cancel` and return
/// [`GraphError::Cancelled`] once it fires.
pub trait BuildGraphProvider {
    /// Computes facts for the requested module.
    ///
    /// Returns `Ok(None)` when the provider has no information for this
    /// snapshot yet.
    ///
    /// # Errors
    /// Returns [`GraphError`] when the query fails or is cancelled.
    fn facts(
        &self,
        request: &GraphRequest<'_>,
        cancel: &CancellationToken,
    ) -> Result<Option<BuildGraphFacts>, GraphError>;
}

/// Provider that answers every request with the same configured result.
#[derive(Debug, Clone, Default)]
pub struct FixedBuildGraph {
    facts: Option<BuildGraphFacts>,
    failure: Option<String>,
}

impl FixedBuildGraph {
    /// Answers with the given facts.
    #[must_use]
    pub const fn with_facts(facts: BuildGraphFacts) -> Self {
        Self {
            facts: Some(facts),
            failure: None,
        }
    }

    /// Answers that no facts are known.
    #[must_use]
    pub const fn without_facts() -> Self {
        Self {
            facts: None,
            failure: None,
        }
    }

    /// Fails every request with [`GraphError::Unavailable`].
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            facts: None,
            failure: Some(message.into()),
        }
    }
}

impl BuildGraphProvider for FixedBuildGraph {
    fn facts(
        &self,
        _request: &GraphRequest<'_>,
        cancel: &CancellationToken,
    ) -> Result<Option<BuildGraphFacts>, GraphError> {
        if cancel.is_cancelled() {
            return Err(GraphError::Cancelled);
        }
        if let Some(message) = &self.failure {
            return Err(GraphError::unavailable(message.clone()));
        }
        Ok(self.facts.clone())
    }
}
