//! The engine's view of a workspace snapshot.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use lsp_types::Uri;
use modsight_graph::{
    BuildGraphFacts, BuildGraphProvider, GraphError, GraphRequest, path_to_uri,
};
use tokio_util::sync::CancellationToken;

/// A module file as seen by one version of the workspace.
///
/// Implemented by the host's session layer. The engine only reads through
/// this trait; nothing here writes to the project.
pub trait ModuleSnapshot {
    /// Identity of the module file.
    fn uri(&self) -> &Uri;

    /// Location of the real module file on disk.
    fn path(&self) -> &Utf8Path;

    /// Editor version of the content.
    fn version(&self) -> i32;

    /// Current content, including unsaved edits.
    ///
    /// # Errors
    /// Returns the I/O error when the content cannot be read.
    fn read_content(&self) -> io::Result<String>;

    /// Asks the build graph how each requirement is used.
    ///
    /// # Errors
    /// Returns [`GraphError`] when the query fails or is cancelled.
    fn build_graph(
        &self,
        request: &GraphRequest<'_>,
        cancel: &CancellationToken,
    ) -> Result<Option<BuildGraphFacts>, GraphError>;
}

/// Snapshot backed by the filesystem and a build-graph provider.
///
/// An overlay stands in for an unsaved editor buffer; without one the
/// content is read from disk on every call.
#[derive(Debug)]
pub struct FsSnapshot<P> {
    uri: Uri,
    path: Utf8PathBuf,
    version: i32,
    overlay: Option<String>,
    provider: P,
}

impl<P: BuildGraphProvider> FsSnapshot<P> {
    /// Creates a snapshot of the module file at an absolute `path`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidPath`] when `path` is relative.
    pub fn new(path: impl Into<Utf8PathBuf>, provider: P) -> Result<Self, GraphError> {
        let module_path = path.into();
        let uri = path_to_uri(&module_path)?;
        Ok(Self {
            uri,
            path: module_path,
            version: 0,
            overlay: None,
            provider,
        })
    }

    /// Serves `content` instead of the file on disk.
    #[must_use]
    pub fn with_overlay(mut self, content: impl Into<String>) -> Self {
        self.overlay = Some(content.into());
        self
    }

    /// Build-graph provider answering this snapshot's queries.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Sets the editor version.
    #[must_use]
    pub const fn with_version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }
}

impl<P: BuildGraphProvider> ModuleSnapshot for FsSnapshot<P> {
    fn uri(&self) -> &Uri {
        &self.uri
    }

    fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn version(&self) -> i32 {
        self.version
    }

    fn read_content(&self) -> io::Result<String> {
        match &self.overlay {
            Some(content) => Ok(content.clone()),
            None => fs::read_to_string(&self.path),
        }
    }

    fn build_graph(
        &self,
        request: &GraphRequest<'_>,
        cancel: &CancellationToken,
    ) -> Result<Option<BuildGraphFacts>, GraphError> {
        self.provider.facts(request, cancel)
    }
}
