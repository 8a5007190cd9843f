//! Staging of shadow module files in temporary directories.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::error::StagingError;
use crate::fingerprint::Fingerprint;

/// Prefix of every shadow directory name.
pub const SHADOW_PREFIX: &str = "modsight-shadow-";

/// File name of the staged module file.
pub const MODULE_FILE_NAME: &str = "go.mod";

/// File name of the checksum file copied next to the shadow.
pub const CHECKSUM_FILE_NAME: &str = "go.sum";

/// Creates shadow copies of module files.
///
/// The stager holds no state between calls; each [`ShadowStager::stage`]
/// produces an independent directory.
#[derive(Debug, Clone, Default)]
pub struct ShadowStager {
    scratch_dir: Option<PathBuf>,
}

impl ShadowStager {
    /// Creates a stager that places shadows in the system temp directory.
    #[must_use]
    pub const fn new() -> Self {
        Self { scratch_dir: None }
    }

    /// Places shadows under `dir` instead of the system temp directory.
    #[must_use]
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    /// Directory shadows are created under, if one was configured.
    #[must_use]
    pub fn scratch_dir(&self) -> Option<&Path> {
        self.scratch_dir.as_deref()
    }

    /// Stages `content` as a shadow of the module file at `original`.
    ///
    /// The original path is only ever read: once to fingerprint it and once
    /// to copy its sibling checksum file when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`StagingError`] when the original cannot be fingerprinted,
    /// the shadow root (configured or the system temp directory) lies
    /// inside the project, or the shadow directory cannot be populated.
    pub fn stage(&self, original: &Path, content: &str) -> Result<ShadowFile, StagingError> {
        let fingerprint = Fingerprint::capture(original)
            .map_err(|err| StagingError::fingerprint(original, &err))?;
        let dir = self.create_directory(original)?;

        let path = dir.path().join(MODULE_FILE_NAME);
        write_file_atomic(&path, content)?;
        let has_checksum = copy_checksum(original, dir.path())?;

        debug!(
            original = %original.display(),
            shadow = %path.display(),
            has_checksum,
            "staged shadow module file"
        );

        Ok(ShadowFile {
            dir,
            path,
            original: original.to_path_buf(),
            fingerprint,
            has_checksum,
        })
    }

    fn create_directory(&self, original: &Path) -> Result<TempDir, StagingError> {
        let root = self
            .scratch_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);

        if let Some(project) = original.parent().filter(|p| !p.as_os_str().is_empty())
            && root.starts_with(project)
        {
            return Err(StagingError::ScratchInsideProject {
                scratch: root,
                project: project.to_path_buf(),
            });
        }

        if self.scratch_dir.is_some() {
            fs::create_dir_all(&root).map_err(|err| StagingError::create_directory(&root, &err))?;
        }
        tempfile::Builder::new()
            .prefix(SHADOW_PREFIX)
            .tempdir_in(&root)
            .map_err(|err| StagingError::create_directory(&root, &err))
    }
}

/// A staged shadow copy.
///
/// The temporary directory and everything in it is removed when the value
/// is dropped.
#[derive(Debug)]
pub struct ShadowFile {
    dir: TempDir,
    path: PathBuf,
    original: PathBuf,
    fingerprint: Fingerprint,
    has_checksum: bool,
}

impl ShadowFile {
    /// Path of the staged module file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temporary directory holding the shadow.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the real module file this shadow was staged from.
    #[must_use]
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Fingerprint of the real module file taken before staging.
    #[must_use]
    pub const fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Returns true when a checksum file was copied alongside the shadow.
    #[must_use]
    pub const fn has_checksum(&self) -> bool {
        self.has_checksum
    }

    /// Reads the current content of the shadow module file.
    ///
    /// # Errors
    ///
    /// Returns [`StagingError::Read`] when the file cannot be read.
    pub fn read_back(&self) -> Result<String, StagingError> {
        fs::read_to_string(&self.path).map_err(|err| StagingError::read(&self.path, &err))
    }

    /// Confirms that the real module file still matches its fingerprint.
    ///
    /// # Errors
    ///
    /// Returns [`StagingError::OriginalChanged`] when the real file differs,
    /// or [`StagingError::Fingerprint`] when it can no longer be read.
    pub fn verify_original(&self) -> Result<(), StagingError> {
        let current = Fingerprint::capture(&self.original)
            .map_err(|err| StagingError::fingerprint(&self.original, &err))?;
        if current == self.fingerprint {
            Ok(())
        } else {
            Err(StagingError::OriginalChanged {
                path: self.original.clone(),
            })
        }
    }

    /// Removes the shadow directory, reporting any failure.
    ///
    /// # Errors
    ///
    /// Returns [`StagingError::Write`] when the directory cannot be removed.
    pub fn close(self) -> Result<(), StagingError> {
        let dir_path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .map_err(|err| StagingError::write(&dir_path, &err))
    }
}

/// Writes content atomically by writing to a temp file and renaming.
fn write_file_atomic(path: &Path, content: &str) -> Result<(), StagingError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp_file =
        tempfile::NamedTempFile::new_in(parent).map_err(|err| StagingError::write(path, &err))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|err| StagingError::write(path, &err))?;
    temp_file
        .persist(path)
        .map_err(|err| StagingError::write(path, &err.error))?;
    Ok(())
}

/// Copies the checksum file beside `original` into `dir`, if there is one.
fn copy_checksum(original: &Path, dir: &Path) -> Result<bool, StagingError> {
    let source = original.with_file_name(CHECKSUM_FILE_NAME);
    let target = dir.join(CHECKSUM_FILE_NAME);
    match fs::copy(&source, &target) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(StagingError::write(&target, &err)),
    }
}
