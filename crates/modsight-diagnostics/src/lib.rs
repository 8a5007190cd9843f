//! Diagnostics for `go.mod` module files.
//!
//! [`compute_diagnostics`] runs one pass over a [`ModuleSnapshot`]:
//!
//! 1. read the editor's view of the module file;
//! 2. stage a shadow copy so external tools never touch the real file;
//! 3. parse the content, collecting syntax findings;
//! 4. when parsing succeeded, ask the snapshot's build graph how each
//!    requirement is used and compare that with the declarations;
//! 5. map every finding onto editor coordinates and group them by file.
//!
//! A pass holds no state between calls. Everything it needs arrives through
//! the [`PassContext`] and the snapshot, and the only errors that escape are
//! cancellation and failure to read the module file. Anything else degrades
//! the result and is logged.

mod analysis;
mod assemble;
mod context;
mod engine;
mod error;
mod snapshot;
pub mod telemetry;

pub use analysis::{AnalysisOptions, SemanticFinding, SemanticKind, analyze};
pub use assemble::{DiagnosticsMap, SYNTAX_SOURCE, assemble};
pub use context::{EngineOptions, PassContext};
pub use engine::{DiagnosticsReport, SemanticStatus, compute_diagnostics};
pub use error::DiagnosticsError;
pub use snapshot::{FsSnapshot, ModuleSnapshot};

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests use expect to fail loudly on setup errors"
)]
mod tests;
