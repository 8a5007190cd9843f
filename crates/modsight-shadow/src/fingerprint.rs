//! Content fingerprints for detecting changes to the real module file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use sha2::{Digest, Sha256};

/// Snapshot of a file's identity at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fingerprint {
    /// No file existed at the path.
    Absent,
    /// The file existed with the given content digest.
    Present {
        /// SHA-256 digest of the file's bytes.
        digest: [u8; 32],
        /// Last modification time, when the platform reports one.
        modified: Option<SystemTime>,
    },
}

impl Fingerprint {
    /// Reads `path` and records its digest and modification time.
    ///
    /// A missing file yields [`Fingerprint::Absent`]; unsaved buffers have no
    /// file on disk yet.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error for anything other than a missing
    /// file.
    pub fn capture(path: &Path) -> std::io::Result<Self> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::Absent),
            Err(err) => return Err(err),
        };
        let modified = fs::metadata(path).and_then(|meta| meta.modified()).ok();
        Ok(Self::Present {
            digest: Sha256::digest(&bytes).into(),
            modified,
        })
    }

    /// Returns true when a file existed at capture time.
    #[must_use]
    pub const fn exists(&self) -> bool {
        matches!(self, Self::Present { .. })
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests use expect to fail loudly on setup errors"
    )]

    use std::fs;

    use super::*;

    #[test]
    fn missing_file_is_absent() {
        let dir = tempfile::tempdir().expect("temp dir");
        let fingerprint = Fingerprint::capture(&dir.path().join("go.mod")).expect("capture");
        assert_eq!(fingerprint, Fingerprint::Absent);
        assert!(!fingerprint.exists());
    }

    #[test]
    fn identical_content_gives_identical_digest() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("go.mod");
        fs::write(&path, "module m\n").expect("write");
        let first = Fingerprint::capture(&path).expect("capture");
        let second = Fingerprint::capture(&path).expect("capture");
        assert!(first.exists());
        assert_eq!(first, second);
    }

    #[test]
    fn changed_content_changes_digest() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("go.mod");
        fs::write(&path, "module m\n").expect("write");
        let before = Fingerprint::capture(&path).expect("capture");
        fs::write(&path, "module n\n").expect("write");
        let after = Fingerprint::capture(&path).expect("capture");
        let (Fingerprint::Present { digest: a, .. }, Fingerprint::Present { digest: b, .. }) =
            (before, after)
        else {
            panic!("both captures should be present");
        };
        assert_ne!(a, b);
    }
}
