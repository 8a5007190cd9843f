//! `file://` identities for module files.

use std::str::FromStr;

use camino::Utf8Path;
use lsp_types::Uri;
use url::Url;

use crate::error::GraphError;

/// Returns the `file://` URI naming the module file at `path`.
///
/// Percent-encoding follows the `url` crate, so the result matches the URI an
/// editor sends for the same file.
///
/// # Errors
///
/// Returns [`GraphError::InvalidPath`] when `path` is relative.
pub fn path_to_uri(path: &Utf8Path) -> Result<Uri, GraphError> {
    let invalid = || GraphError::InvalidPath {
        path: path.to_path_buf(),
    };
    let url = Url::from_file_path(path).map_err(|()| invalid())?;
    Uri::from_str(url.as_str()).map_err(|_| invalid())
}
