//! Shadow copies of module files.
//!
//! Tools that analyse a module file may want to rewrite it (a tidy run, for
//! example). This crate stages the in-memory content into a uniquely named
//! temporary directory so those tools work on a copy while the user's real
//! file stays untouched. The real file is fingerprinted before staging so a
//! caller can confirm afterwards that nothing changed it.

mod error;
mod fingerprint;
mod stager;

pub use error::StagingError;
pub use fingerprint::Fingerprint;
pub use stager::{CHECKSUM_FILE_NAME, MODULE_FILE_NAME, SHADOW_PREFIX, ShadowFile, ShadowStager};
