//! Per-pass inputs: options and cancellation.

use camino::Utf8PathBuf;
use modsight_config::{Config, DEFAULT_TIDY_SOURCE, IndirectCheck};
use tokio_util::sync::CancellationToken;

use crate::analysis::AnalysisOptions;
use crate::error::DiagnosticsError;

/// Engine settings for a pass, projected from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Stage a shadow copy before querying the build graph.
    pub shadow_enabled: bool,
    /// Directory shadows are created under; the system temp dir when unset.
    pub scratch_dir: Option<Utf8PathBuf>,
    /// Which indirect-marker mismatches are reported.
    pub indirect_check: IndirectCheck,
    /// Source tag attached to semantic diagnostics.
    pub tidy_source: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            shadow_enabled: true,
            scratch_dir: None,
            indirect_check: IndirectCheck::default(),
            tidy_source: DEFAULT_TIDY_SOURCE.to_owned(),
        }
    }
}

impl EngineOptions {
    /// Options handed to the dependency analyzer.
    #[must_use]
    pub const fn analysis(&self) -> AnalysisOptions {
        AnalysisOptions {
            indirect_check: self.indirect_check,
        }
    }
}

impl From<&Config> for EngineOptions {
    fn from(config: &Config) -> Self {
        Self {
            shadow_enabled: config.shadow_enabled(),
            scratch_dir: config.scratch_dir().cloned(),
            indirect_check: config.indirect_check(),
            tidy_source: config.tidy_source().to_owned(),
        }
    }
}

/// Everything a pass needs besides the snapshot itself.
#[derive(Debug, Clone, Default)]
pub struct PassContext {
    cancel: CancellationToken,
    options: EngineOptions,
}

impl PassContext {
    /// Creates a context from a cancellation token and options.
    #[must_use]
    pub const fn new(cancel: CancellationToken, options: EngineOptions) -> Self {
        Self { cancel, options }
    }

    /// Token observed at each stage boundary.
    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Engine options for this pass.
    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub(crate) fn ensure_active(&self) -> Result<(), DiagnosticsError> {
        if self.cancel.is_cancelled() {
            Err(DiagnosticsError::Cancelled)
        } else {
            Ok(())
        }
    }
}
