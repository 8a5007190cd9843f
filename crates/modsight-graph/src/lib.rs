//! Build-graph facts for module dependency analysis.
//!
//! The diagnostics engine never resolves dependencies itself. It asks a
//! [`BuildGraphProvider`] how the project's build uses each required module
//! and receives [`BuildGraphFacts`] in return. A provider that cannot answer
//! reports that through [`GraphError`], and callers record the gap as a
//! [`GraphOutcome::Skipped`] rather than guessing.

mod error;
mod facts;
mod outcome;
mod provider;
mod uri;

pub use error::GraphError;
pub use facts::{BuildGraphFacts, DependencyUse};
pub use outcome::{GraphOutcome, SkipReason};
pub use provider::{BuildGraphProvider, FixedBuildGraph, GraphRequest};
pub use uri::path_to_uri;
