//! Error types for build-graph queries.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors returned by build-graph providers.
#[derive(Debug, Clone, Error)]
pub enum GraphError {
    /// The provider could not compute facts for this snapshot.
    #[error("build graph unavailable: {message}")]
    Unavailable {
        /// Description of why no facts could be produced.
        message: String,
    },

    /// The query observed a cancellation request.
    #[error("build graph query cancelled")]
    Cancelled,

    /// A module file path has no `file://` form, usually because it is
    /// relative.
    #[error("cannot identify {path} by a file URI")]
    InvalidPath {
        /// The rejected path.
        path: Utf8PathBuf,
    },

    /// An IO error occurred while querying the build graph.
    #[error("IO error: {message}")]
    Io {
        /// Description of the IO error.
        message: String,
        /// Underlying error wrapped in Arc for Clone support.
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl GraphError {
    /// Creates a new `Unavailable` error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a new `Io` error.
    #[must_use]
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Arc::new(source),
        }
    }

    /// Returns true when the error reports cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
