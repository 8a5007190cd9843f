//! Errors that abort a diagnostics pass.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Failures that escape [`crate::compute_diagnostics`].
///
/// Staging and build-graph failures are not listed here: they degrade the
/// pass and are logged instead.
#[derive(Debug, Clone, Error)]
pub enum DiagnosticsError {
    /// The pass observed a cancellation request.
    #[error("diagnostics pass cancelled")]
    Cancelled,

    /// The module file content could not be read.
    #[error("failed to read module file {path}: {message}")]
    ReadModuleFile {
        /// Path of the module file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
        /// Underlying error wrapped in Arc for Clone support.
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl DiagnosticsError {
    /// Creates a read failure for the module file at `path`.
    #[must_use]
    pub fn read_module_file(path: &Utf8Path, source: std::io::Error) -> Self {
        Self::ReadModuleFile {
            path: path.to_path_buf(),
            message: source.to_string(),
            source: Arc::new(source),
        }
    }
}
