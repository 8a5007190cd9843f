//! Error types for shadow staging.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while staging or inspecting a shadow copy.
///
/// All variants are recoverable from the caller's point of view: a pass that
/// cannot stage a shadow continues with the in-memory content only.
#[derive(Debug, Error)]
pub enum StagingError {
    /// The original file could not be read for fingerprinting.
    #[error("failed to fingerprint {path}: {message}")]
    Fingerprint {
        /// Path to the original module file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The directory chosen for shadows lies inside the project tree.
    #[error("scratch directory {scratch} is inside the project at {project}")]
    ScratchInsideProject {
        /// Configured scratch directory, or the system temp directory.
        scratch: PathBuf,
        /// Directory holding the original module file.
        project: PathBuf,
    },

    /// The temporary directory could not be created.
    #[error("failed to create shadow directory under {root}: {message}")]
    CreateDirectory {
        /// Directory the shadow was to be created in.
        root: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A file inside the shadow directory could not be written.
    #[error("failed to write shadow file {path}: {message}")]
    Write {
        /// Path of the shadow file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A shadow file could not be read back.
    #[error("failed to read shadow file {path}: {message}")]
    Read {
        /// Path of the shadow file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The real module file differs from its fingerprint taken at staging.
    #[error("original module file {path} changed while its shadow was staged")]
    OriginalChanged {
        /// Path to the original module file.
        path: PathBuf,
    },
}

impl StagingError {
    /// Creates a fingerprint error.
    pub fn fingerprint(path: &Path, error: &std::io::Error) -> Self {
        Self::Fingerprint {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    /// Creates a directory creation error.
    pub fn create_directory(root: &Path, error: &std::io::Error) -> Self {
        Self::CreateDirectory {
            root: root.to_path_buf(),
            message: error.to_string(),
        }
    }

    /// Creates a shadow write error.
    pub fn write(path: &Path, error: &std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    /// Creates a shadow read error.
    pub fn read(path: &Path, error: &std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }
}
